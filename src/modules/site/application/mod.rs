pub mod content_service;
pub mod page_cache;
pub mod site_pages;

pub use content_service::ContentService;
pub use page_cache::{CacheState, PageCache, PageOutcome, Served};
pub use site_pages::SitePages;
