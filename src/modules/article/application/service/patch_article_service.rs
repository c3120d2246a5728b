use async_trait::async_trait;
use uuid::Uuid;

use super::replace_article_service::map_update_error;
use crate::modules::article::application::ports::incoming::use_cases::{
    PatchArticleUseCase, UpdateArticleError,
};
use crate::modules::article::application::ports::outgoing::article_repository::{
    PatchArticleData, ArticleRepository,
};
use crate::modules::article::domain::entities::ArticleRecord;

pub struct PatchArticleService<R>
where
    R: ArticleRepository,
{
    article_repository: R,
}

impl<R> PatchArticleService<R>
where
    R: ArticleRepository,
{
    pub fn new(article_repository: R) -> Self {
        Self { article_repository }
    }
}

#[async_trait]
impl<R> PatchArticleUseCase for PatchArticleService<R>
where
    R: ArticleRepository + Send + Sync,
{
    async fn execute(
        &self,
        article_id: Uuid,
        data: PatchArticleData,
    ) -> Result<ArticleRecord, UpdateArticleError> {
        data.validate()
            .map_err(|e| UpdateArticleError::Validation(e.to_string()))?;

        self.article_repository
            .patch_article(article_id, data)
            .await
            .map_err(map_update_error)
    }
}
