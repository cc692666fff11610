//! Unauthenticated read endpoints backing the public site.
//!
//! The home page is served as one aggregate so the frontend renders with
//! a single round-trip; the queries behind it run in parallel.

use axum::extract::{Path, State};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::banner::BannerImage;
use folio_db::models::project::ProjectWithImages;
use folio_db::models::resume::ResumeEntry;
use folio_db::models::service::Service;
use folio_db::models::setting::{SectionVisibility, SiteSetting};
use folio_db::models::skill::{FloatingSkill, Skill};
use folio_db::models::social_link::SocialLink;
use folio_db::models::testimonial::Testimonial;
use folio_db::repositories::{
    BannerRepo, FloatingSkillRepo, ProjectImageRepo, ProjectRepo, ResumeRepo, ResumeTable,
    SectionVisibilityRepo, ServiceRepo, SiteSettingRepo, SkillRepo, SocialLinkRepo,
    TestimonialRepo,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// How many featured projects the home page shows.
const FEATURED_LIMIT: i64 = 6;

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub settings: Vec<SiteSetting>,
    pub sections: Vec<SectionVisibility>,
    pub banners: Vec<BannerImage>,
    pub services: Vec<Service>,
    pub skills: Vec<Skill>,
    pub floating_skills: Vec<FloatingSkill>,
    pub featured_projects: Vec<ProjectWithImages>,
    pub experience: Vec<ResumeEntry>,
    pub education: Vec<ResumeEntry>,
    pub testimonials: Vec<Testimonial>,
    pub social_links: Vec<SocialLink>,
}

/// GET /api/v1/public/home
pub async fn home(State(state): State<AppState>) -> AppResult<Json<DataResponse<HomePage>>> {
    let (
        settings,
        sections,
        banners,
        services,
        skills,
        floating_skills,
        featured,
        experience,
        education,
        testimonials,
        social_links,
    ) = tokio::try_join!(
        SiteSettingRepo::list(&state.pool),
        SectionVisibilityRepo::list(&state.pool),
        BannerRepo::list_active(&state.pool),
        ServiceRepo::list_active(&state.pool),
        SkillRepo::list_active(&state.pool),
        FloatingSkillRepo::list_active(&state.pool),
        ProjectRepo::list_featured(&state.pool, FEATURED_LIMIT),
        ResumeRepo::list_active(&state.pool, ResumeTable::Experience),
        ResumeRepo::list_active(&state.pool, ResumeTable::Education),
        TestimonialRepo::list_approved(&state.pool),
        SocialLinkRepo::list_active(&state.pool),
    )?;

    let featured_projects = with_images(&state, featured).await?;

    Ok(Json(DataResponse {
        data: HomePage {
            settings,
            sections,
            banners,
            services,
            skills,
            floating_skills,
            featured_projects,
            experience,
            education,
            testimonials,
            social_links,
        },
    }))
}

/// GET /api/v1/public/projects
pub async fn projects(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProjectWithImages>>>> {
    let published = ProjectRepo::list_published(&state.pool).await?;
    let data = with_images(&state, published).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/public/projects/{id}
///
/// 404 unless the project is published and active; drafts never leak.
pub async fn project_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectWithImages>>> {
    let project = ProjectRepo::find_published_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Project", id }))?;
    let images = ProjectImageRepo::list_by_project(&state.pool, project.id).await?;
    Ok(Json(DataResponse {
        data: ProjectWithImages { project, images },
    }))
}

/// Attach galleries to a batch of projects, preserving order.
async fn with_images(
    state: &AppState,
    projects: Vec<folio_db::models::project::Project>,
) -> Result<Vec<ProjectWithImages>, AppError> {
    let galleries = futures::future::try_join_all(
        projects
            .iter()
            .map(|p| ProjectImageRepo::list_by_project(&state.pool, p.id)),
    )
    .await?;

    Ok(projects
        .into_iter()
        .zip(galleries)
        .map(|(project, images)| ProjectWithImages { project, images })
        .collect())
}
