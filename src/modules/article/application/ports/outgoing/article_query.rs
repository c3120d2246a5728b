// src/modules/article/application/ports/outgoing/article_query.rs

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::article::domain::entities::ArticleRecord;

//
// ──────────────────────────────────────────────────────────
// Sorting
// ──────────────────────────────────────────────────────────
//

/// The public article listing is ordered by slug descending; the article
/// pages order by publication date. Each caller picks its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleSort {
    #[default]
    SlugDesc,
    DateDesc,
    Newest,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ArticleQueryError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ArticleQuery: Send + Sync {
    async fn list(&self, sort: ArticleSort) -> Result<Vec<ArticleRecord>, ArticleQueryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<ArticleRecord>, ArticleQueryError>;

    /// Slug lookup is case-insensitive.
    async fn get_by_slug(&self, slug: &str) -> Result<Option<ArticleRecord>, ArticleQueryError>;

    async fn list_slugs(&self) -> Result<Vec<String>, ArticleQueryError>;
}
