mod get_resume;
mod update_resume;

pub use get_resume::{GetResumeError, GetResumeUseCase};
pub use update_resume::{UpdateResumeError, UpdateResumeUseCase};
