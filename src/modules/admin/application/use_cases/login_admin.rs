use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::modules::admin::application::domain::entities::AdminCredentials;
use crate::modules::admin::application::ports::outgoing::{PasswordHasher, TokenProvider};

// ========================= Login Request =========================

#[derive(Debug, Clone)]
pub struct LoginAdminRequest {
    pub username: String,
    pub password: String,
}

// ====================== Login Error =============================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginAdminError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================ Login Response =================================

#[derive(Debug, Clone)]
pub struct LoginAdminResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginAdminRequest)
        -> Result<LoginAdminResponse, LoginAdminError>;
}

// ============================ Service =================================

pub struct LoginAdminService {
    credentials: AdminCredentials,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl LoginAdminService {
    pub fn new(
        credentials: AdminCredentials,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            credentials,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(
        &self,
        request: LoginAdminRequest,
    ) -> Result<LoginAdminResponse, LoginAdminError> {
        // Hash is verified on every attempt, known username or not.
        let username_matches = request.username.trim() == self.credentials.username;

        let password_matches = self
            .hasher
            .verify_password(&request.password, &self.credentials.password_hash)
            .await
            .map_err(|e| {
                error!("Admin password verification failed: {}", e);
                LoginAdminError::PasswordVerificationFailed(e.to_string())
            })?;

        if !(username_matches && password_matches) {
            warn!("Rejected admin login attempt");
            return Err(LoginAdminError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(&self.credentials.username)
            .map_err(|e| LoginAdminError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginAdminResponse {
            access_token,
            expires_in: self.tokens.access_token_expiry(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::admin::application::ports::outgoing::{
        HashError, TokenClaims, TokenError,
    };

    struct FakeHasher {
        result: Result<bool, HashError>,
    }

    #[async_trait]
    impl PasswordHasher for FakeHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            unimplemented!("not used in this test")
        }

        async fn verify_password(&self, password: &str, _hash: &str) -> Result<bool, HashError> {
            self.result.clone().map(|ok| ok && password == "correct")
        }
    }

    struct FakeTokens;

    impl TokenProvider for FakeTokens {
        fn generate_access_token(&self, subject: &str) -> Result<String, TokenError> {
            Ok(format!("token-for-{}", subject))
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            Err(TokenError::MalformedToken)
        }

        fn access_token_expiry(&self) -> i64 {
            1800
        }
    }

    fn service(hash_result: Result<bool, HashError>) -> LoginAdminService {
        LoginAdminService::new(
            AdminCredentials {
                username: "admin".to_string(),
                password_hash: "$argon2id$stub".to_string(),
            },
            Arc::new(FakeHasher {
                result: hash_result,
            }),
            Arc::new(FakeTokens),
        )
    }

    fn request(username: &str, password: &str) -> LoginAdminRequest {
        LoginAdminRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success_issues_token() {
        let res = service(Ok(true))
            .execute(request("admin", "correct"))
            .await
            .unwrap();

        assert_eq!(res.access_token, "token-for-admin");
        assert_eq!(res.expires_in, 1800);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let res = service(Ok(true)).execute(request("admin", "wrong")).await;
        assert!(matches!(res, Err(LoginAdminError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_wrong_username() {
        let res = service(Ok(true)).execute(request("root", "correct")).await;
        assert!(matches!(res, Err(LoginAdminError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_hasher_failure() {
        let res = service(Err(HashError::VerifyFailed))
            .execute(request("admin", "correct"))
            .await;
        assert!(matches!(
            res,
            Err(LoginAdminError::PasswordVerificationFailed(_))
        ));
    }
}
