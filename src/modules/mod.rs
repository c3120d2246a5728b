pub mod admin;
pub mod article;
pub mod project;
pub mod resume;
pub mod site;
pub mod stats;
