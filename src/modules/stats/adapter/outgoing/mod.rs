mod github_client;
mod leetcode_client;
mod memory_stats_cache;
mod redis_stats_cache;
mod system_clock;

pub use github_client::GithubStatsClient;
pub use leetcode_client::LeetCodeStatsClient;
pub use memory_stats_cache::InMemoryStatsCacheStore;
pub use redis_stats_cache::RedisStatsCacheStore;
pub use system_clock::SystemClock;
