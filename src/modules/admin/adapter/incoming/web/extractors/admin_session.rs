use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use tracing::debug;

use crate::modules::admin::application::ports::outgoing::TokenProvider;
use crate::shared::api::ApiResponse;

/// Proof that the request carries a valid admin session token.
///
/// Every failure (no header, wrong scheme, bad signature, expired, wrong
/// token type) produces the same 401 body, so callers learn nothing about
/// why a token was refused.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
    pub expires_at: i64,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let tokens = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
            Some(service) => service,
            None => {
                tracing::error!("TokenProvider missing from app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(create_api_error(ApiResponse::unauthorized())));
        };

        match tokens.verify_token(&token) {
            Ok(claims) => ready(Ok(AdminSession {
                username: claims.sub,
                expires_at: claims.exp,
            })),
            Err(e) => {
                debug!("Admin token rejected: {}", e);
                ready(Err(create_api_error(ApiResponse::unauthorized())))
            }
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
