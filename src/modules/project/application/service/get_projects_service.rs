use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectSort,
};
use crate::modules::project::domain::entities::ProjectRecord;

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, sort: ProjectSort) -> Result<Vec<ProjectRecord>, GetProjectsError> {
        self.query
            .list(sort)
            .await
            .map_err(|e| GetProjectsError::QueryFailed(e.to_string()))
    }
}
