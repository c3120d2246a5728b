mod create_project_service;
mod delete_project_service;
mod get_projects_service;
mod get_single_project_service;
mod patch_project_service;
mod replace_project_service;

pub use create_project_service::CreateProjectService;
pub use delete_project_service::DeleteProjectService;
pub use get_projects_service::GetProjectsService;
pub use get_single_project_service::GetSingleProjectService;
pub use patch_project_service::PatchProjectService;
pub use replace_project_service::ReplaceProjectService;
