use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::article::application::ports::incoming::use_cases::{
    GetSingleArticleError, GetSingleArticleUseCase,
};
use crate::modules::article::application::ports::outgoing::article_query::ArticleQuery;
use crate::modules::article::domain::entities::ArticleRecord;

pub struct GetSingleArticleService<Q>
where
    Q: ArticleQuery,
{
    query: Q,
}

impl<Q> GetSingleArticleService<Q>
where
    Q: ArticleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleArticleUseCase for GetSingleArticleService<Q>
where
    Q: ArticleQuery + Send + Sync,
{
    async fn execute(&self, article_id: Uuid) -> Result<ArticleRecord, GetSingleArticleError> {
        self.query
            .get_by_id(article_id)
            .await
            .map_err(|e| GetSingleArticleError::RepositoryError(e.to_string()))?
            .ok_or(GetSingleArticleError::NotFound)
    }
}
