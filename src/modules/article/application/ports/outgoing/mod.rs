pub mod article_query;
pub mod article_repository;

pub use article_query::{ArticleQuery, ArticleQueryError, ArticleSort};
pub use article_repository::{
    ArticleData, ArticleRepository, ArticleRepositoryError, PatchArticleData,
};
