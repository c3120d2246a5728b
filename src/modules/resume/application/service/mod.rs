mod get_resume_service;
mod update_resume_service;

pub use get_resume_service::GetResumeService;
pub use update_resume_service::UpdateResumeService;
