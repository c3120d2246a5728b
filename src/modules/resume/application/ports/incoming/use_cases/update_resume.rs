use async_trait::async_trait;

use crate::modules::resume::domain::entities::Resume;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateResumeError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateResumeUseCase: Send + Sync {
    async fn execute(&self, resume: Resume) -> Result<Resume, UpdateResumeError>;
}
