use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::article::application::ports::incoming::use_cases::GetArticlesError;
use crate::modules::article::application::ports::outgoing::article_query::ArticleSort;
use crate::modules::article::domain::entities::ArticleRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct GetArticlesQuery {
    #[serde(default)]
    pub sort: ArticleSort,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List articles
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = "articles",
    params(
        ("sort" = Option<String>, Query, description = "`slug_desc` (default), `date_desc` or `newest`")
    ),
    responses(
        (status = 200, description = "All articles", body = inline(SuccessResponse<Vec<ArticleRecord>>)),
        (status = 400, description = "Store error", body = ErrorResponse),
    )
)]
#[get("/api/articles")]
pub async fn get_articles_handler(
    query: web::Query<GetArticlesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.article.get_list.execute(query.into_inner().sort).await {
        Ok(articles) => ApiResponse::success(articles),

        Err(GetArticlesError::QueryFailed(msg)) => {
            error!("Failed to list articles: {}", msg);
            ApiResponse::store_error(&msg)
        }
    }
}
