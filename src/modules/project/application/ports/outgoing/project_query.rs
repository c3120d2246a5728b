// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::project::domain::entities::ProjectRecord;

//
// ──────────────────────────────────────────────────────────
// Sorting
// ──────────────────────────────────────────────────────────
//

/// Listing order chosen by each caller. The public listing has always been
/// ordered by title descending, so that stays the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSort {
    #[default]
    TitleDesc,
    TitleAsc,
    Newest,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
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
pub trait ProjectQuery: Send + Sync {
    async fn list(&self, sort: ProjectSort) -> Result<Vec<ProjectRecord>, ProjectQueryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<ProjectRecord>, ProjectQueryError>;

    /// Slug lookup is case-insensitive.
    async fn get_by_slug(&self, slug: &str) -> Result<Option<ProjectRecord>, ProjectQueryError>;

    /// Every known slug, used to enumerate detail pages up front.
    async fn list_slugs(&self) -> Result<Vec<String>, ProjectQueryError>;
}
