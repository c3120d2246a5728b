use async_trait::async_trait;

use crate::modules::article::application::ports::incoming::use_cases::{
    CreateArticleError, CreateArticleUseCase,
};
use crate::modules::article::application::ports::outgoing::article_repository::{
    ArticleData, ArticleRepository, ArticleRepositoryError,
};
use crate::modules::article::domain::entities::ArticleRecord;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateArticleService<R>
where
    R: ArticleRepository,
{
    article_repository: R,
}

impl<R> CreateArticleService<R>
where
    R: ArticleRepository,
{
    pub fn new(article_repository: R) -> Self {
        Self { article_repository }
    }
}

#[async_trait]
impl<R> CreateArticleUseCase for CreateArticleService<R>
where
    R: ArticleRepository + Send + Sync,
{
    async fn execute(&self, data: ArticleData) -> Result<ArticleRecord, CreateArticleError> {
        data.validate()
            .map_err(|e| CreateArticleError::Validation(e.to_string()))?;

        self.article_repository
            .create_article(data)
            .await
            .map_err(|e| match e {
                ArticleRepositoryError::SlugAlreadyExists => CreateArticleError::SlugAlreadyExists,
                ArticleRepositoryError::StoreUnavailable(msg)
                | ArticleRepositoryError::DatabaseError(msg)
                | ArticleRepositoryError::SerializationError(msg) => {
                    CreateArticleError::RepositoryError(msg)
                }
                ArticleRepositoryError::NotFound => CreateArticleError::RepositoryError(
                    "unexpected not found while creating article".to_string(),
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::article_fixtures::{sample_article_data, MockArticleRepo};

    // =====================================================
    // Success
    // =====================================================

    #[tokio::test]
    async fn test_execute_success() {
        let repo = MockArticleRepo::ok("my-article");
        let service = CreateArticleService::new(repo.clone());

        let res = service.execute(sample_article_data()).await;

        assert_eq!(res.unwrap().slug, "my-article");
        assert_eq!(repo.calls(), 1);
    }

    // =====================================================
    // Validation happens before the store is touched
    // =====================================================

    #[tokio::test]
    async fn test_execute_accepts_free_form_date() {
        let repo = MockArticleRepo::ok("my-article");
        let service = CreateArticleService::new(repo.clone());

        let mut data = sample_article_data();
        data.date = "March 15, 2024".to_string();

        assert!(service.execute(data).await.is_ok());
        assert_eq!(repo.calls(), 1);
    }

    #[tokio::test]
    async fn test_execute_rejects_blank_date_without_store_call() {
        let repo = MockArticleRepo::ok("my-article");
        let service = CreateArticleService::new(repo.clone());

        let mut data = sample_article_data();
        data.date = " ".to_string();

        let res = service.execute(data).await;

        assert!(matches!(
            res.unwrap_err(),
            CreateArticleError::Validation(msg) if msg.contains("date")
        ));
        assert_eq!(repo.calls(), 0);
    }

    // =====================================================
    // Error mapping
    // =====================================================

    #[tokio::test]
    async fn test_execute_maps_slug_already_exists() {
        let repo = MockArticleRepo::err(ArticleRepositoryError::SlugAlreadyExists);
        let service = CreateArticleService::new(repo);

        let res = service.execute(sample_article_data()).await;

        assert!(matches!(
            res.unwrap_err(),
            CreateArticleError::SlugAlreadyExists
        ));
    }

    #[tokio::test]
    async fn test_execute_maps_store_unavailable() {
        let repo = MockArticleRepo::err(ArticleRepositoryError::StoreUnavailable(
            "db down".to_string(),
        ));
        let service = CreateArticleService::new(repo);

        let res = service.execute(sample_article_data()).await;

        assert!(matches!(
            res.unwrap_err(),
            CreateArticleError::RepositoryError(msg) if msg == "db down"
        ));
    }

    #[tokio::test]
    async fn test_execute_maps_unexpected_not_found() {
        let repo = MockArticleRepo::err(ArticleRepositoryError::NotFound);
        let service = CreateArticleService::new(repo);

        let res = service.execute(sample_article_data()).await;

        assert!(matches!(
            res.unwrap_err(),
            CreateArticleError::RepositoryError(msg)
                if msg == "unexpected not found while creating article"
        ));
    }
}
