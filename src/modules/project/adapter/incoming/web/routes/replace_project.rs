use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::create_project::ProjectRequest;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::modules::project::domain::entities::ProjectRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Maps update failures shared by PUT and PATCH.
pub(super) fn update_error_response(project_id: Uuid, err: UpdateProjectError) -> HttpResponse {
    match err {
        UpdateProjectError::NotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        UpdateProjectError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        UpdateProjectError::SlugAlreadyExists => {
            ApiResponse::bad_request("SLUG_ALREADY_EXISTS", "Project slug already exists")
        }
        UpdateProjectError::RepositoryError(msg) => {
            error!(%project_id, "Repository error updating project: {}", msg);
            ApiResponse::store_error(&msg)
        }
    }
}

/// Replace a project
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Replaced project", body = inline(SuccessResponse<ProjectRecord>)),
        (status = 400, description = "Validation or store error", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/projects/{id}")]
pub async fn replace_project_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<ProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data
        .project
        .replace
        .execute(project_id, req.into_inner().into())
        .await
    {
        Ok(project) => {
            info!(%project_id, "Project replaced");
            data.site.expire_all();
            ApiResponse::success(project)
        }
        Err(e) => update_error_response(project_id, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::project::application::ports::incoming::use_cases::ReplaceProjectUseCase;
    use crate::modules::project::application::ports::outgoing::project_repository::ProjectData;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};
    use crate::tests::support::project_fixtures::sample_project_record;

    #[derive(Clone)]
    struct MockReplace {
        result: Result<ProjectRecord, UpdateProjectError>,
    }

    #[async_trait]
    impl ReplaceProjectUseCase for MockReplace {
        async fn execute(
            &self,
            _id: Uuid,
            _data: ProjectData,
        ) -> Result<ProjectRecord, UpdateProjectError> {
            self.result.clone()
        }
    }

    async fn call(uc: MockReplace, auth: bool) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_replace_project(uc)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(replace_project_handler),
        )
        .await;

        let mut req = test::TestRequest::put()
            .uri(&format!("/api/projects/{}", Uuid::new_v4()))
            .set_json(json!({
                "slug": "new-slug",
                "title": "New",
                "description": "d",
                "tags": []
            }));
        if auth {
            req = req.insert_header(("Authorization", admin_bearer()));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_replace_project_success() {
        let (status, body) = call(
            MockReplace {
                result: Ok(sample_project_record("new-slug")),
            },
            true,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["slug"], "new-slug");
    }

    #[actix_web::test]
    async fn test_replace_project_not_found() {
        let (status, body) = call(
            MockReplace {
                result: Err(UpdateProjectError::NotFound),
            },
            true,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_replace_project_requires_session() {
        let (status, _) = call(
            MockReplace {
                result: Ok(sample_project_record("x")),
            },
            false,
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
