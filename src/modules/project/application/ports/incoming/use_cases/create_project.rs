use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::ports::outgoing::project_repository::ProjectData;
use crate::modules::project::domain::entities::ProjectRecord;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum CreateProjectError {
    Validation(String),
    SlugAlreadyExists,
    RepositoryError(String),
}

impl fmt::Display for CreateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateProjectError::Validation(msg) => write!(f, "validation failed: {}", msg),
            CreateProjectError::SlugAlreadyExists => write!(f, "slug already exists"),
            CreateProjectError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: ProjectData) -> Result<ProjectRecord, CreateProjectError>;
}
