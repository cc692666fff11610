//! Route definitions.
//!
//! Everything except `/health` and `/media` lives under `/api/v1`:
//!
//! | Prefix             | Module          | Auth   |
//! |--------------------|-----------------|--------|
//! | `/auth`            | [`auth`]        | mixed  |
//! | `/projects`        | [`projects`]    | bearer |
//! | `/services`        | [`services`]    | bearer |
//! | `/skills`          | [`skills`]      | bearer |
//! | `/floating-skills` | [`skills`]      | bearer |
//! | `/experience`      | [`resume`]      | bearer |
//! | `/education`       | [`resume`]      | bearer |
//! | `/testimonials`    | [`testimonials`]| bearer |
//! | `/social-links`    | [`social_links`]| bearer |
//! | `/categories`      | [`categories`]  | bearer |
//! | `/banners`         | [`banners`]     | bearer |
//! | `/messages`        | [`messages`]    | bearer |
//! | `/settings`        | [`settings`]    | bearer |
//! | `/sections`        | [`settings`]    | bearer |
//! | `/search`          | [`search`]      | bearer |
//! | `/dashboard`       | [`dashboard`]   | bearer |
//! | `/uploads`         | [`uploads`]     | bearer |
//! | `/public`          | [`public`]      | none   |
//! | `/contact`         | [`contact`]     | none   |
//! | `/keepalive`       | [`keepalive`]   | none   |

use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod banners;
pub mod categories;
pub mod contact;
pub mod dashboard;
pub mod health;
pub mod keepalive;
pub mod messages;
pub mod projects;
pub mod public;
pub mod resume;
pub mod search;
pub mod services;
pub mod settings;
pub mod skills;
pub mod social_links;
pub mod testimonials;
pub mod uploads;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(projects::router())
        .merge(services::router())
        .merge(skills::router())
        .merge(resume::router())
        .merge(testimonials::router())
        .merge(social_links::router())
        .merge(categories::router())
        .merge(banners::router())
        .merge(messages::router())
        .merge(settings::router())
        .merge(search::router())
        .merge(dashboard::router())
        .merge(uploads::router())
        .merge(public::router())
        .merge(contact::router())
        .merge(keepalive::router())
}
