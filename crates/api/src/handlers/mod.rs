//! HTTP handler functions, one module per resource.

pub mod auth;
pub mod banner;
pub mod category;
pub mod contact;
pub mod dashboard;
pub mod keepalive;
pub mod message;
pub mod project;
pub mod public;
pub mod resume;
pub mod search;
pub mod service;
pub mod setting;
pub mod skill;
pub mod social_link;
pub mod testimonial;
pub mod uploads;
