use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{DeletedAck, ErrorResponse, SuccessResponse};
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::article::application::ports::incoming::use_cases::DeleteArticleError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete an article
#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    tag = "articles",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "Deleted", body = inline(SuccessResponse<DeletedAck>)),
        (status = 400, description = "Store error", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No such article", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/articles/{id}")]
pub async fn delete_article_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let article_id = path.into_inner();

    match data.article.delete.execute(article_id).await {
        Ok(()) => {
            info!(%article_id, "Article deleted");
            data.site.expire_all();
            ApiResponse::deleted()
        }

        Err(DeleteArticleError::NotFound) => {
            ApiResponse::not_found("ARTICLE_NOT_FOUND", "Article not found")
        }

        Err(DeleteArticleError::RepositoryError(msg)) => {
            error!(%article_id, "Repository error deleting article: {}", msg);
            ApiResponse::store_error(&msg)
        }
    }
}
