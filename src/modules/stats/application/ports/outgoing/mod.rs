pub mod clock;
pub mod stats_cache_store;
pub mod stats_fetcher;

pub use clock::Clock;
pub use stats_cache_store::{StatsCacheError, StatsCacheStore};
pub use stats_fetcher::{StatsFetchError, StatsFetcher};
