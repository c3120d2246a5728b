use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::create_article::ArticleRequest;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::article::application::ports::incoming::use_cases::UpdateArticleError;
use crate::modules::article::domain::entities::ArticleRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Maps update failures shared by PUT and PATCH.
pub(super) fn update_error_response(article_id: Uuid, err: UpdateArticleError) -> HttpResponse {
    match err {
        UpdateArticleError::NotFound => {
            ApiResponse::not_found("ARTICLE_NOT_FOUND", "Article not found")
        }
        UpdateArticleError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        UpdateArticleError::SlugAlreadyExists => {
            ApiResponse::bad_request("SLUG_ALREADY_EXISTS", "Article slug already exists")
        }
        UpdateArticleError::RepositoryError(msg) => {
            error!(%article_id, "Repository error updating article: {}", msg);
            ApiResponse::store_error(&msg)
        }
    }
}

/// Replace an article
#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    tag = "articles",
    params(("id" = Uuid, Path, description = "Article id")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Replaced article", body = inline(SuccessResponse<ArticleRecord>)),
        (status = 400, description = "Validation or store error", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No such article", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/articles/{id}")]
pub async fn replace_article_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<ArticleRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let article_id = path.into_inner();

    match data
        .article
        .replace
        .execute(article_id, req.into_inner().into())
        .await
    {
        Ok(article) => {
            info!(%article_id, "Article replaced");
            data.site.expire_all();
            ApiResponse::success(article)
        }
        Err(e) => update_error_response(article_id, e),
    }
}
