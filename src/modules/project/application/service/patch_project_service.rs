use async_trait::async_trait;
use uuid::Uuid;

use super::replace_project_service::map_update_error;
use crate::modules::project::application::ports::incoming::use_cases::{
    PatchProjectUseCase, UpdateProjectError,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    PatchProjectData, ProjectRepository,
};
use crate::modules::project::domain::entities::ProjectRecord;

pub struct PatchProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> PatchProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> PatchProjectUseCase for PatchProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        data.validate()
            .map_err(|e| UpdateProjectError::Validation(e.to_string()))?;

        self.project_repository
            .patch_project(project_id, data)
            .await
            .map_err(map_update_error)
    }
}
