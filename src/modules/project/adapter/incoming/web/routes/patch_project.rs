use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::replace_project::update_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::ports::outgoing::project_repository::PatchProjectData;
use crate::modules::project::domain::entities::ProjectRecord;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

/// Omitted fields are kept; `null` clears `link`, `github` and `image`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchProjectRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub slug: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub tags: PatchField<Vec<String>>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub link: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub github: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub image: PatchField<String>,
}

impl From<PatchProjectRequest> for PatchProjectData {
    fn from(req: PatchProjectRequest) -> Self {
        PatchProjectData {
            slug: req.slug,
            title: req.title,
            description: req.description,
            tags: req.tags,
            link: req.link,
            github: req.github,
            image: req.image,
        }
    }
}

/// Partially update a project
#[utoipa::path(
    patch,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = PatchProjectRequest,
    responses(
        (status = 200, description = "Updated project", body = inline(SuccessResponse<ProjectRecord>)),
        (status = 400, description = "Validation or store error", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/projects/{id}")]
pub async fn patch_project_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<PatchProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data
        .project
        .patch
        .execute(project_id, req.into_inner().into())
        .await
    {
        Ok(project) => {
            info!(%project_id, "Project patched");
            data.site.expire_all();
            ApiResponse::success(project)
        }
        Err(e) => update_error_response(project_id, e),
    }
}
