use std::sync::Arc;

use crate::modules::admin::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::admin::application::ports::outgoing::TokenProvider;

pub const TEST_ADMIN: &str = "admin";

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "portfolio-test".to_string(),
        access_token_expiry: 3600,
    })
}

/// Same signing key as the tokens below; register it as app data.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(create_test_jwt_service())
}

pub fn valid_admin_token() -> String {
    create_test_jwt_service()
        .generate_access_token(TEST_ADMIN)
        .expect("test token should encode")
}

/// `Authorization` header value for an authenticated admin.
pub fn admin_bearer() -> String {
    format!("Bearer {}", valid_admin_token())
}
