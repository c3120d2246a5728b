use crate::config::{parse_or, required, ConfigError};

pub const MIN_SECRET_LEN: usize = 32;
pub const MAX_ACCESS_EXPIRY_SECS: i64 = 86_400;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // seconds
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("issuer", &self.issuer)
            .field("access_token_expiry", &self.access_token_expiry)
            .finish_non_exhaustive()
    }
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;
        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| "portfolio".to_string());
        let access_token_expiry = parse_or("JWT_ACCESS_EXPIRY", 1800_i64)?;

        Self::new(secret_key, issuer, access_token_expiry)
    }

    pub fn new(
        secret_key: String,
        issuer: String,
        access_token_expiry: i64,
    ) -> Result<Self, ConfigError> {
        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {} characters", MIN_SECRET_LEN),
            });
        }

        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY_SECS {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: format!("must be between 1 and {} seconds", MAX_ACCESS_EXPIRY_SECS),
            });
        }

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
