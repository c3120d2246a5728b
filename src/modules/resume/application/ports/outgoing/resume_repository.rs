use async_trait::async_trait;

use crate::modules::resume::domain::entities::Resume;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeRepositoryError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Stored document no longer matches the resume shape.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Singleton storage for the resume, addressed by a fixed key rather than
/// searched for.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn get(&self) -> Result<Option<Resume>, ResumeRepositoryError>;

    /// Inserts the document or replaces the existing one in a single
    /// statement.
    async fn upsert(&self, resume: Resume) -> Result<Resume, ResumeRepositoryError>;
}
