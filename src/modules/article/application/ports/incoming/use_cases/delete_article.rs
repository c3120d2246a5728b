use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteArticleError {
    #[error("Article not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteArticleUseCase: Send + Sync {
    async fn execute(&self, article_id: Uuid) -> Result<(), DeleteArticleError>;
}
