//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod banner;
pub mod category;
pub mod contact_message;
pub mod project;
pub mod resume;
pub mod service;
pub mod session;
pub mod setting;
pub mod skill;
pub mod social_link;
pub mod testimonial;
pub mod user;
