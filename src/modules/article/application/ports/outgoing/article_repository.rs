// src/modules/article/application/ports/outgoing/article_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::article::domain::entities::ArticleRecord;
use crate::shared::patch::PatchField;
use crate::shared::validation::{
    validate_max_len, validate_required, validate_slug, ValidationError, MAX_TITLE_LEN,
};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ArticleData {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub description: String,
    pub tags: Vec<String>,
    pub content: String,
    pub cover_image: Option<String>,
}

impl ArticleData {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_slug(&self.slug)?;
        validate_required("title", &self.title)?;
        validate_max_len("title", self.title.trim(), MAX_TITLE_LEN)?;
        validate_required("date", &self.date)?;
        validate_required("content", &self.content)?;
        Ok(())
    }
}

/// `cover_image` accepts `Null` to clear; every other field only
/// distinguishes kept from replaced.
#[derive(Debug, Clone, Default)]
pub struct PatchArticleData {
    pub slug: PatchField<String>,
    pub title: PatchField<String>,
    pub date: PatchField<String>,
    pub description: PatchField<String>,
    pub tags: PatchField<Vec<String>>,
    pub content: PatchField<String>,
    pub cover_image: PatchField<String>,
}

impl PatchArticleData {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(slug) = self.slug.as_value() {
            validate_slug(slug)?;
        }
        if let Some(title) = self.title.as_value() {
            validate_required("title", title)?;
            validate_max_len("title", title.trim(), MAX_TITLE_LEN)?;
        }
        if let Some(date) = self.date.as_value() {
            validate_required("date", date)?;
        }
        if let Some(content) = self.content.as_value() {
            validate_required("content", content)?;
        }
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ArticleRepositoryError {
    #[error("Article not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn create_article(&self, data: ArticleData)
        -> Result<ArticleRecord, ArticleRepositoryError>;

    async fn replace_article(
        &self,
        id: Uuid,
        data: ArticleData,
    ) -> Result<ArticleRecord, ArticleRepositoryError>;

    async fn patch_article(
        &self,
        id: Uuid,
        data: PatchArticleData,
    ) -> Result<ArticleRecord, ArticleRepositoryError>;

    async fn delete_article(&self, id: Uuid) -> Result<(), ArticleRepositoryError>;
}
