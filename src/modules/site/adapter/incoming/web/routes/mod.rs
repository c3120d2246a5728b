mod detail_pages;
mod list_pages;
mod page_response;

pub use detail_pages::{article_page_handler, __path_article_page_handler, project_page_handler, __path_project_page_handler};
pub use list_pages::{about_page_handler, __path_about_page_handler, articles_page_handler, __path_articles_page_handler, index_page_handler, __path_index_page_handler, projects_page_handler, __path_projects_page_handler};
pub use page_response::{PageResponse, PAGE_CACHE_HEADER};
