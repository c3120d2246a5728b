mod create_article;
mod delete_article;
mod get_articles;
mod get_single_article;
mod patch_article;
mod replace_article;

pub use create_article::{create_article_handler, __path_create_article_handler, ArticleRequest};
pub use delete_article::{delete_article_handler, __path_delete_article_handler};
pub use get_articles::{get_articles_handler, __path_get_articles_handler, GetArticlesQuery};
pub use get_single_article::{get_single_article_handler, __path_get_single_article_handler};
pub use patch_article::{patch_article_handler, __path_patch_article_handler, PatchArticleRequest};
pub use replace_article::{replace_article_handler, __path_replace_article_handler};
