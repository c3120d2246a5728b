use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Provider + cache key
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsProvider {
    Github,
    Leetcode,
}

impl StatsProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsProvider::Github => "github",
            StatsProvider::Leetcode => "leetcode",
        }
    }
}

impl fmt::Display for StatsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stats provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for StatsProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "github" => Ok(StatsProvider::Github),
            "leetcode" => Ok(StatsProvider::Leetcode),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}

pub const MAX_USERNAME_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsernameError {
    #[error("username is required")]
    Missing,

    #[error("username must be at most {} characters", MAX_USERNAME_LEN)]
    TooLong,

    #[error("username may only contain letters, digits, '-' and '_'")]
    InvalidCharacters,
}

/// Trimmed username, checked against what both providers accept.
pub fn parse_username(raw: &str) -> Result<String, UsernameError> {
    let username = raw.trim();

    if username.is_empty() {
        return Err(UsernameError::Missing);
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(UsernameError::TooLong);
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(UsernameError::InvalidCharacters);
    }

    Ok(username.to_string())
}

/// `provider:username`
pub fn cache_key(provider: StatsProvider, username: &str) -> String {
    format!("{}:{}", provider.as_str(), username)
}

//
// ──────────────────────────────────────────────────────────
// Cache entry
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsCacheEntry {
    pub value: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl StatsCacheEntry {
    pub fn new(value: serde_json::Value, timestamp: DateTime<Utc>) -> Self {
        Self { value, timestamp }
    }

    /// Valid only while `now - timestamp < ttl`.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now - self.timestamp < ttl
    }
}

//
// ──────────────────────────────────────────────────────────
// Provider summaries
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GithubStats {
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub total_stars: u64,
    pub total_forks: u64,
    /// Most used primary languages across public repos, most frequent first.
    pub top_languages: Vec<LanguageCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LanguageCount {
    pub language: String,
    pub repos: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeStats {
    pub username: String,
    pub ranking: Option<u64>,
    pub reputation: Option<i64>,
    pub total_solved: u64,
    pub easy_solved: u64,
    pub medium_solved: u64,
    pub hard_solved: u64,
    pub total_questions: u64,
}
