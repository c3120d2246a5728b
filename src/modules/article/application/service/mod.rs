mod create_article_service;
mod delete_article_service;
mod get_articles_service;
mod get_single_article_service;
mod patch_article_service;
mod replace_article_service;

pub use create_article_service::CreateArticleService;
pub use delete_article_service::DeleteArticleService;
pub use get_articles_service::GetArticlesService;
pub use get_single_article_service::GetSingleArticleService;
pub use patch_article_service::PatchArticleService;
pub use replace_article_service::ReplaceArticleService;
