pub mod resume_repository;

pub use resume_repository::{ResumeRepository, ResumeRepositoryError};
