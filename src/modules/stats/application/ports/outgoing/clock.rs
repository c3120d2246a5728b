use chrono::{DateTime, Utc};

/// Source of "now" for TTL decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
