mod get_resume;
mod update_resume;

pub use get_resume::{get_resume_handler, __path_get_resume_handler};
pub use update_resume::{update_resume_handler, __path_update_resume_handler};
