use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{DeletedAck, ErrorResponse, SuccessResponse};
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Deleted", body = inline(SuccessResponse<DeletedAck>)),
        (status = 400, description = "Store error", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.delete.execute(project_id).await {
        Ok(()) => {
            info!(%project_id, "Project deleted");
            data.site.expire_all();
            ApiResponse::deleted()
        }

        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(DeleteProjectError::RepositoryError(msg)) => {
            error!(%project_id, "Repository error deleting project: {}", msg);
            ApiResponse::store_error(&msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};

    #[derive(Clone)]
    struct MockDelete {
        result: Result<(), DeleteProjectError>,
        calls: Arc<AtomicUsize>,
    }

    impl MockDelete {
        fn new(result: Result<(), DeleteProjectError>) -> Self {
            Self {
                result,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl DeleteProjectUseCase for MockDelete {
        async fn execute(&self, _id: Uuid) -> Result<(), DeleteProjectError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    async fn call(uc: MockDelete, auth: Option<String>) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default().with_delete_project(uc).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_project_handler),
        )
        .await;

        let mut req = test::TestRequest::delete().uri(&format!("/api/projects/{}", Uuid::new_v4()));
        if let Some(h) = auth {
            req = req.insert_header(("Authorization", h));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_delete_project_acknowledges() {
        let (status, body) = call(MockDelete::new(Ok(())), Some(admin_bearer())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["deleted"], true);
    }

    #[actix_web::test]
    async fn test_delete_project_not_found() {
        let (status, _) = call(
            MockDelete::new(Err(DeleteProjectError::NotFound)),
            Some(admin_bearer()),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_with_bad_token_makes_no_call() {
        let uc = MockDelete::new(Ok(()));
        let calls = Arc::clone(&uc.calls);

        let (status, body) = call(uc, Some("Bearer forged.token.value".to_string())).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
