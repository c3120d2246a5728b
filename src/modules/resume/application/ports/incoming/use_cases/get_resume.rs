use async_trait::async_trait;

use crate::modules::resume::domain::entities::Resume;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetResumeError {
    #[error("Resume not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetResumeUseCase: Send + Sync {
    async fn execute(&self) -> Result<Resume, GetResumeError>;
}
