pub mod project_query;
pub mod project_repository;

pub use project_query::{ProjectQuery, ProjectQueryError, ProjectSort};
pub use project_repository::{
    PatchProjectData, ProjectData, ProjectRepository, ProjectRepositoryError,
};
