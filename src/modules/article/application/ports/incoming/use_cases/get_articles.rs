use async_trait::async_trait;

use crate::modules::article::application::ports::outgoing::article_query::ArticleSort;
use crate::modules::article::domain::entities::ArticleRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetArticlesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetArticlesUseCase: Send + Sync {
    async fn execute(&self, sort: ArticleSort) -> Result<Vec<ArticleRecord>, GetArticlesError>;
}
