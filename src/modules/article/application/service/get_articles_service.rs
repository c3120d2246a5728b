use async_trait::async_trait;

use crate::modules::article::application::ports::incoming::use_cases::{
    GetArticlesError, GetArticlesUseCase,
};
use crate::modules::article::application::ports::outgoing::article_query::{
    ArticleQuery, ArticleSort,
};
use crate::modules::article::domain::entities::ArticleRecord;

pub struct GetArticlesService<Q>
where
    Q: ArticleQuery,
{
    query: Q,
}

impl<Q> GetArticlesService<Q>
where
    Q: ArticleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetArticlesUseCase for GetArticlesService<Q>
where
    Q: ArticleQuery + Send + Sync,
{
    async fn execute(&self, sort: ArticleSort) -> Result<Vec<ArticleRecord>, GetArticlesError> {
        self.query
            .list(sort)
            .await
            .map_err(|e| GetArticlesError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::article::application::ports::outgoing::article_query::ArticleQueryError;
    use crate::tests::support::article_fixtures::{sample_article_record, MockArticleQuery};

    #[tokio::test]
    async fn test_execute_returns_list_and_forwards_sort() {
        let query = MockArticleQuery::with_articles(vec![
            sample_article_record("b"),
            sample_article_record("a"),
        ]);
        let service = GetArticlesService::new(query.clone());

        let res = service.execute(ArticleSort::DateDesc).await.unwrap();

        assert_eq!(res.len(), 2);
        assert_eq!(query.last_sort(), Some(ArticleSort::DateDesc));
    }

    #[tokio::test]
    async fn test_execute_maps_query_error() {
        let query = MockArticleQuery::failing(ArticleQueryError::StoreUnavailable(
            "timeout".to_string(),
        ));
        let service = GetArticlesService::new(query);

        let res = service.execute(ArticleSort::default()).await;

        assert!(matches!(
            res.unwrap_err(),
            GetArticlesError::QueryFailed(msg) if msg.contains("timeout")
        ));
    }
}
