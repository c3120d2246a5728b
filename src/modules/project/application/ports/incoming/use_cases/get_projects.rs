use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_query::ProjectSort;
use crate::modules::project::domain::entities::ProjectRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self, sort: ProjectSort) -> Result<Vec<ProjectRecord>, GetProjectsError>;
}
