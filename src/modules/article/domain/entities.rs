use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Externalized article shape: string id, no store timestamps, and no
/// `coverImage` key when the article has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "zero-copy-parsing")]
    pub slug: String,

    pub title: String,

    /// Publication date as the author wrote it. Not parsed; `DateDesc`
    /// compares it as text.
    #[schema(example = "2024-03-18")]
    pub date: String,

    pub description: String,

    pub tags: Vec<String>,

    /// Markdown body
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}
