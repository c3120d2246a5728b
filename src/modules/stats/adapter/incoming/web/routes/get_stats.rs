use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::modules::stats::application::ports::incoming::use_cases::GetStatsError;
use crate::modules::stats::domain::entities::StatsProvider;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const STATS_CACHE_HEADER: &str = "x-stats-cache";

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub username: Option<String>,
}

/// Profile statistics from a third-party provider, cached per username
#[utoipa::path(
    get,
    path = "/api/stats/{provider}",
    tag = "stats",
    params(
        ("provider" = String, Path, description = "`github` or `leetcode`"),
        ("username" = String, Query, description = "Account name on the provider"),
    ),
    responses(
        (status = 200, description = "Provider summary, `GithubStats` or `LeetCodeStats`", body = Object),
        (status = 400, description = "Missing or invalid username", body = ErrorResponse),
        (status = 404, description = "Unknown provider, unknown user or rate limited", body = ErrorResponse),
        (status = 500, description = "Provider unavailable", body = ErrorResponse),
    )
)]
#[get("/api/stats/{provider}")]
pub async fn get_stats_handler(
    path: web::Path<String>,
    query: web::Query<StatsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let provider: StatsProvider = match path.into_inner().parse() {
        Ok(p) => p,
        Err(e) => return ApiResponse::not_found("UNKNOWN_PROVIDER", &e.to_string()),
    };

    let username = query.into_inner().username.unwrap_or_default();

    match data.stats.execute(provider, &username).await {
        Ok(lookup) => HttpResponse::Ok()
            .insert_header((
                STATS_CACHE_HEADER,
                if lookup.cache_hit { "HIT" } else { "MISS" },
            ))
            .json(lookup.value),

        Err(GetStatsError::InvalidUsername(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(GetStatsError::NotFound) => {
            ApiResponse::not_found("STATS_NOT_FOUND", "User not found on provider")
        }

        Err(GetStatsError::RateLimited) => {
            warn!(%provider, "Stats provider rate limit hit");
            ApiResponse::not_found("RATE_LIMITED", "Provider rate limit reached, retry later")
        }

        Err(GetStatsError::Unavailable(msg)) => {
            error!(%provider, "Stats provider unavailable: {}", msg);
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "STATS_UNAVAILABLE",
                "Could not load stats, retry later",
            )
        }
    }
}
