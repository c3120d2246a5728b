use std::sync::Arc;

use crate::modules::article::application::ports::incoming::use_cases::{
    CreateArticleUseCase, DeleteArticleUseCase, GetArticlesUseCase, GetSingleArticleUseCase,
    PatchArticleUseCase, ReplaceArticleUseCase,
};

#[derive(Clone)]
pub struct ArticleUseCases {
    pub create: Arc<dyn CreateArticleUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetArticlesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleArticleUseCase + Send + Sync>,
    pub replace: Arc<dyn ReplaceArticleUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchArticleUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteArticleUseCase + Send + Sync>,
}
