use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::replace_article::update_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::article::application::ports::outgoing::article_repository::PatchArticleData;
use crate::modules::article::domain::entities::ArticleRecord;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

/// Omitted fields are kept; `null` clears `coverImage`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchArticleRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub slug: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2024-01-15")]
    pub date: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub tags: PatchField<Vec<String>>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub content: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub cover_image: PatchField<String>,
}

impl From<PatchArticleRequest> for PatchArticleData {
    fn from(req: PatchArticleRequest) -> Self {
        PatchArticleData {
            slug: req.slug,
            title: req.title,
            date: req.date,
            description: req.description,
            tags: req.tags,
            content: req.content,
            cover_image: req.cover_image,
        }
    }
}

/// Partially update an article
#[utoipa::path(
    patch,
    path = "/api/articles/{id}",
    tag = "articles",
    params(("id" = Uuid, Path, description = "Article id")),
    request_body = PatchArticleRequest,
    responses(
        (status = 200, description = "Updated article", body = inline(SuccessResponse<ArticleRecord>)),
        (status = 400, description = "Validation or store error", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No such article", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/articles/{id}")]
pub async fn patch_article_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<PatchArticleRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let article_id = path.into_inner();

    match data
        .article
        .patch
        .execute(article_id, req.into_inner().into())
        .await
    {
        Ok(article) => {
            info!(%article_id, "Article patched");
            data.site.expire_all();
            ApiResponse::success(article)
        }
        Err(e) => update_error_response(article_id, e),
    }
}
