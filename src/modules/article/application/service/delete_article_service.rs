use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::article::application::ports::incoming::use_cases::{
    DeleteArticleError, DeleteArticleUseCase,
};
use crate::modules::article::application::ports::outgoing::article_repository::{
    ArticleRepository, ArticleRepositoryError,
};

pub struct DeleteArticleService<R>
where
    R: ArticleRepository,
{
    article_repository: R,
}

impl<R> DeleteArticleService<R>
where
    R: ArticleRepository,
{
    pub fn new(article_repository: R) -> Self {
        Self { article_repository }
    }
}

#[async_trait]
impl<R> DeleteArticleUseCase for DeleteArticleService<R>
where
    R: ArticleRepository + Send + Sync,
{
    async fn execute(&self, article_id: Uuid) -> Result<(), DeleteArticleError> {
        self.article_repository
            .delete_article(article_id)
            .await
            .map_err(|e| match e {
                ArticleRepositoryError::NotFound => DeleteArticleError::NotFound,
                other => DeleteArticleError::RepositoryError(other.to_string()),
            })
    }
}
