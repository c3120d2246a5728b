mod create_article;
mod delete_article;
mod get_articles;
mod get_single_article;
mod update_article;

pub use create_article::{CreateArticleError, CreateArticleUseCase};
pub use delete_article::{DeleteArticleError, DeleteArticleUseCase};
pub use get_articles::{GetArticlesError, GetArticlesUseCase};
pub use get_single_article::{GetSingleArticleError, GetSingleArticleUseCase};
pub use update_article::{PatchArticleUseCase, ReplaceArticleUseCase, UpdateArticleError};
