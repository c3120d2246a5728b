mod get_stats;

pub use get_stats::{GetStatsError, GetStatsUseCase, StatsLookup};
