use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;
use crate::modules::project::domain::entities::ProjectRecord;

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<ProjectRecord, GetSingleProjectError> {
        self.query
            .get_by_id(project_id)
            .await
            .map_err(|e| GetSingleProjectError::RepositoryError(e.to_string()))?
            .ok_or(GetSingleProjectError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;
    use crate::tests::support::project_fixtures::{sample_project_record, MockProjectQuery};

    #[tokio::test]
    async fn test_execute_found() {
        let record = sample_project_record("found");
        let id: Uuid = record.id.parse().unwrap();
        let service = GetSingleProjectService::new(MockProjectQuery::with_projects(vec![record]));

        let res = service.execute(id).await.unwrap();

        assert_eq!(res.slug, "found");
    }

    #[tokio::test]
    async fn test_execute_not_found() {
        let service = GetSingleProjectService::new(MockProjectQuery::with_projects(vec![]));

        let res = service.execute(Uuid::new_v4()).await;

        assert!(matches!(res.unwrap_err(), GetSingleProjectError::NotFound));
    }

    #[tokio::test]
    async fn test_execute_maps_query_error() {
        let service = GetSingleProjectService::new(MockProjectQuery::failing(
            ProjectQueryError::DatabaseError("boom".to_string()),
        ));

        let res = service.execute(Uuid::new_v4()).await;

        assert!(matches!(
            res.unwrap_err(),
            GetSingleProjectError::RepositoryError(_)
        ));
    }
}
