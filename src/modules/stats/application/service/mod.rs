mod stats_cache_service;

pub use stats_cache_service::StatsCacheService;
