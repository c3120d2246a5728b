// src/config.rs
use std::env;
use std::time::Duration;

use crate::modules::admin::adapter::outgoing::jwt::JwtConfig;
use crate::modules::admin::application::domain::entities::AdminCredentials;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    /// Apply pending schema migrations at startup.
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub cache_ttl: Duration,
    pub http_timeout: Duration,
    pub github_api_base: String,
    pub github_token: Option<String>,
    pub leetcode_graphql_url: String,
    pub redis_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub admin: AdminCredentials,
    pub stats: StatsConfig,
    pub page_revalidate: Duration,
}

pub const DEFAULT_STATS_TTL_SECS: u64 = 3600;
pub const DEFAULT_PAGE_REVALIDATE_SECS: u64 = 60;

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env_name);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let database = DatabaseConfig {
            url: required("DATABASE_URL")?,
            max_connections: parse_or("DB_MAX_CONNECTIONS", 10)?,
            min_connections: parse_or("DB_MIN_CONNECTIONS", 1)?,
            connect_timeout: Duration::from_secs(parse_or("DB_CONNECT_TIMEOUT_SECS", 5)?),
            acquire_timeout: Duration::from_secs(parse_or("DB_ACQUIRE_TIMEOUT_SECS", 5)?),
            run_migrations: parse_or("DB_RUN_MIGRATIONS", true)?,
        };

        let stats = StatsConfig {
            cache_ttl: Duration::from_secs(parse_or(
                "STATS_CACHE_TTL_SECS",
                DEFAULT_STATS_TTL_SECS,
            )?),
            http_timeout: Duration::from_secs(parse_or("STATS_HTTP_TIMEOUT_SECS", 10)?),
            github_api_base: env::var("GITHUB_API_BASE")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            github_token: optional("GITHUB_TOKEN"),
            leetcode_graphql_url: env::var("LEETCODE_GRAPHQL_URL")
                .unwrap_or_else(|_| "https://leetcode.com/graphql".to_string()),
            redis_url: optional("REDIS_URL"),
        };

        let admin = AdminCredentials {
            username: required("ADMIN_USERNAME")?,
            password_hash: required("ADMIN_PASSWORD_HASH")?,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or("PORT", 8080)?,
            database,
            jwt: JwtConfig::from_env()?,
            admin,
            stats,
            page_revalidate: Duration::from_secs(parse_or(
                "PAGE_REVALIDATE_SECS",
                DEFAULT_PAGE_REVALIDATE_SECS,
            )?),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(key)),
    }
}

pub(crate) fn optional(key: &'static str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub(crate) fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
