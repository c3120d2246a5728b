pub mod app_state_builder;
pub mod article_fixtures;
pub mod auth_helper;
pub mod project_fixtures;
pub mod resume_fixtures;
pub mod stubs;
