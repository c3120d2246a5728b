mod create_project;
mod delete_project;
mod get_projects;
mod get_single_project;
mod patch_project;
mod replace_project;

pub use create_project::{create_project_handler, __path_create_project_handler, ProjectRequest};
pub use delete_project::{delete_project_handler, __path_delete_project_handler};
pub use get_projects::{get_projects_handler, __path_get_projects_handler, GetProjectsQuery};
pub use get_single_project::{get_single_project_handler, __path_get_single_project_handler};
pub use patch_project::{patch_project_handler, __path_patch_project_handler, PatchProjectRequest};
pub use replace_project::{replace_project_handler, __path_replace_project_handler};
