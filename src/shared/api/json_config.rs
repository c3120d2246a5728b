// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Body size cap for admin forms; article markup is the largest payload.
const MAX_JSON_BYTES: usize = 1024 * 1024;

/// Malformed or incomplete JSON bodies (e.g. a missing required field)
/// become `400 VALIDATION_ERROR` in the standard envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            tracing::debug!(error = %message, "Rejected JSON body");
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
