use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::{
    ReplaceProjectUseCase, UpdateProjectError,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::domain::entities::ProjectRecord;

pub struct ReplaceProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> ReplaceProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

pub(super) fn map_update_error(e: ProjectRepositoryError) -> UpdateProjectError {
    match e {
        ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
        ProjectRepositoryError::SlugAlreadyExists => UpdateProjectError::SlugAlreadyExists,
        ProjectRepositoryError::StoreUnavailable(msg)
        | ProjectRepositoryError::DatabaseError(msg)
        | ProjectRepositoryError::SerializationError(msg) => {
            UpdateProjectError::RepositoryError(msg)
        }
    }
}

#[async_trait]
impl<R> ReplaceProjectUseCase for ReplaceProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        data.validate()
            .map_err(|e| UpdateProjectError::Validation(e.to_string()))?;

        self.project_repository
            .replace_project(project_id, data)
            .await
            .map_err(map_update_error)
    }
}
