//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod banner_repo;
pub mod category_repo;
pub mod contact_message_repo;
pub mod dashboard_repo;
pub mod project_repo;
pub mod resume_repo;
pub mod search_repo;
pub mod service_repo;
pub mod session_repo;
pub mod setting_repo;
pub mod skill_repo;
pub mod social_link_repo;
pub mod testimonial_repo;
pub mod user_repo;

pub use banner_repo::BannerRepo;
pub use category_repo::CategoryRepo;
pub use contact_message_repo::ContactMessageRepo;
pub use dashboard_repo::DashboardRepo;
pub use project_repo::{ProjectImageRepo, ProjectRepo};
pub use resume_repo::{ResumeRepo, ResumeTable};
pub use search_repo::SearchRepo;
pub use service_repo::ServiceRepo;
pub use session_repo::SessionRepo;
pub use setting_repo::{SectionVisibilityRepo, SiteSettingRepo};
pub use skill_repo::{FloatingSkillRepo, SkillRepo};
pub use social_link_repo::SocialLinkRepo;
pub use testimonial_repo::TestimonialRepo;
pub use user_repo::UserRepo;
