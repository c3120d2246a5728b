use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_repository::{
    PatchProjectData, ProjectData,
};
use crate::modules::project::domain::entities::ProjectRecord;

/// Shared by full replace (PUT) and partial update (PATCH).
#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReplaceProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectRecord, UpdateProjectError>;
}

#[async_trait]
pub trait PatchProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectRecord, UpdateProjectError>;
}
