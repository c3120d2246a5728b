use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::article::domain::entities::ArticleRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleArticleError {
    #[error("Article not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleArticleUseCase: Send + Sync {
    async fn execute(&self, article_id: Uuid) -> Result<ArticleRecord, GetSingleArticleError>;
}
