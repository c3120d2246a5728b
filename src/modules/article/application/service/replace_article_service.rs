use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::article::application::ports::incoming::use_cases::{
    ReplaceArticleUseCase, UpdateArticleError,
};
use crate::modules::article::application::ports::outgoing::article_repository::{
    ArticleData, ArticleRepository, ArticleRepositoryError,
};
use crate::modules::article::domain::entities::ArticleRecord;

pub struct ReplaceArticleService<R>
where
    R: ArticleRepository,
{
    article_repository: R,
}

impl<R> ReplaceArticleService<R>
where
    R: ArticleRepository,
{
    pub fn new(article_repository: R) -> Self {
        Self { article_repository }
    }
}

pub(super) fn map_update_error(e: ArticleRepositoryError) -> UpdateArticleError {
    match e {
        ArticleRepositoryError::NotFound => UpdateArticleError::NotFound,
        ArticleRepositoryError::SlugAlreadyExists => UpdateArticleError::SlugAlreadyExists,
        ArticleRepositoryError::StoreUnavailable(msg)
        | ArticleRepositoryError::DatabaseError(msg)
        | ArticleRepositoryError::SerializationError(msg) => {
            UpdateArticleError::RepositoryError(msg)
        }
    }
}

#[async_trait]
impl<R> ReplaceArticleUseCase for ReplaceArticleService<R>
where
    R: ArticleRepository + Send + Sync,
{
    async fn execute(
        &self,
        article_id: Uuid,
        data: ArticleData,
    ) -> Result<ArticleRecord, UpdateArticleError> {
        data.validate()
            .map_err(|e| UpdateArticleError::Validation(e.to_string()))?;

        self.article_repository
            .replace_article(article_id, data)
            .await
            .map_err(map_update_error)
    }
}
