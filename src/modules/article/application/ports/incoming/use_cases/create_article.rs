use async_trait::async_trait;
use std::fmt;

use crate::modules::article::application::ports::outgoing::article_repository::ArticleData;
use crate::modules::article::domain::entities::ArticleRecord;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum CreateArticleError {
    Validation(String),
    SlugAlreadyExists,
    RepositoryError(String),
}

impl fmt::Display for CreateArticleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateArticleError::Validation(msg) => write!(f, "validation failed: {}", msg),
            CreateArticleError::SlugAlreadyExists => write!(f, "slug already exists"),
            CreateArticleError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateArticleUseCase: Send + Sync {
    async fn execute(&self, data: ArticleData) -> Result<ArticleRecord, CreateArticleError>;
}
