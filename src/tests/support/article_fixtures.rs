use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::article::application::ports::outgoing::article_query::{
    ArticleQuery, ArticleQueryError, ArticleSort,
};
use crate::modules::article::application::ports::outgoing::article_repository::{
    ArticleData, ArticleRepository, ArticleRepositoryError, PatchArticleData,
};
use crate::modules::article::domain::entities::ArticleRecord;

pub fn sample_article_record(slug: &str) -> ArticleRecord {
    ArticleRecord {
        id: Uuid::new_v4().to_string(),
        slug: slug.to_string(),
        title: format!("Notes on {}", slug),
        date: "2024-01-15".to_string(),
        description: "Short summary".to_string(),
        tags: vec!["rust".to_string()],
        content: format!("# {}\n\nBody text.", slug),
        cover_image: None,
    }
}

pub fn sample_article_data() -> ArticleData {
    ArticleData {
        slug: "my-article".to_string(),
        title: "My Article".to_string(),
        date: "2024-01-15".to_string(),
        description: "Short summary".to_string(),
        tags: vec!["rust".to_string()],
        content: "# Hello\n\nWorld".to_string(),
        cover_image: Some("https://cdn.example.com/cover.png".to_string()),
    }
}

/// Canned write result shared by every repository method.
#[derive(Clone)]
pub struct MockArticleRepo {
    result: Result<ArticleRecord, ArticleRepositoryError>,
    calls: Arc<AtomicUsize>,
}

impl MockArticleRepo {
    pub fn ok(slug: &str) -> Self {
        Self::with_result(Ok(sample_article_record(slug)))
    }

    pub fn err(error: ArticleRepositoryError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<ArticleRecord, ArticleRepositoryError>) -> Self {
        Self {
            result,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<ArticleRecord, ArticleRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

#[async_trait]
impl ArticleRepository for MockArticleRepo {
    async fn create_article(
        &self,
        _data: ArticleData,
    ) -> Result<ArticleRecord, ArticleRepositoryError> {
        self.record_call()
    }

    async fn replace_article(
        &self,
        _id: Uuid,
        _data: ArticleData,
    ) -> Result<ArticleRecord, ArticleRepositoryError> {
        self.record_call()
    }

    async fn patch_article(
        &self,
        _id: Uuid,
        _data: PatchArticleData,
    ) -> Result<ArticleRecord, ArticleRepositoryError> {
        self.record_call()
    }

    async fn delete_article(&self, _id: Uuid) -> Result<(), ArticleRepositoryError> {
        self.record_call().map(|_| ())
    }
}

/// In-memory read side. Lookups search the canned list.
#[derive(Clone)]
pub struct MockArticleQuery {
    articles: Result<Vec<ArticleRecord>, ArticleQueryError>,
    last_sort: Arc<Mutex<Option<ArticleSort>>>,
}

impl MockArticleQuery {
    pub fn with_articles(articles: Vec<ArticleRecord>) -> Self {
        Self {
            articles: Ok(articles),
            last_sort: Arc::default(),
        }
    }

    pub fn failing(error: ArticleQueryError) -> Self {
        Self {
            articles: Err(error),
            last_sort: Arc::default(),
        }
    }

    pub fn last_sort(&self) -> Option<ArticleSort> {
        *self.last_sort.lock().unwrap()
    }
}

#[async_trait]
impl ArticleQuery for MockArticleQuery {
    async fn list(&self, sort: ArticleSort) -> Result<Vec<ArticleRecord>, ArticleQueryError> {
        *self.last_sort.lock().unwrap() = Some(sort);
        self.articles.clone()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<ArticleRecord>, ArticleQueryError> {
        let id = id.to_string();
        Ok(self.articles.clone()?.into_iter().find(|a| a.id == id))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<ArticleRecord>, ArticleQueryError> {
        Ok(self
            .articles
            .clone()?
            .into_iter()
            .find(|a| a.slug.eq_ignore_ascii_case(slug)))
    }

    async fn list_slugs(&self) -> Result<Vec<String>, ArticleQueryError> {
        Ok(self.articles.clone()?.into_iter().map(|a| a.slug).collect())
    }
}
