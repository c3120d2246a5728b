use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::article::application::ports::outgoing::article_repository::{
    PatchArticleData, ArticleData,
};
use crate::modules::article::domain::entities::ArticleRecord;

/// Shared by full replace (PUT) and partial update (PATCH).
#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateArticleError {
    #[error("Article not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReplaceArticleUseCase: Send + Sync {
    async fn execute(
        &self,
        article_id: Uuid,
        data: ArticleData,
    ) -> Result<ArticleRecord, UpdateArticleError>;
}

#[async_trait]
pub trait PatchArticleUseCase: Send + Sync {
    async fn execute(
        &self,
        article_id: Uuid,
        data: PatchArticleData,
    ) -> Result<ArticleRecord, UpdateArticleError>;
}
