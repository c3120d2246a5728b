use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::application::ports::outgoing::project_query::ProjectSort;
use crate::modules::project::domain::entities::ProjectRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct GetProjectsQuery {
    #[serde(default)]
    pub sort: ProjectSort,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List projects
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(
        ("sort" = Option<String>, Query, description = "`title_desc` (default), `title_asc` or `newest`")
    ),
    responses(
        (status = 200, description = "All projects", body = inline(SuccessResponse<Vec<ProjectRecord>>)),
        (status = 400, description = "Store error", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.get_list.execute(query.into_inner().sort).await {
        Ok(projects) => ApiResponse::success(projects),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
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
    use std::sync::{Arc, Mutex};

    use crate::modules::project::application::ports::incoming::use_cases::GetProjectsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::project_fixtures::sample_project_record;

    #[derive(Clone)]
    struct MockGetProjects {
        result: Result<Vec<ProjectRecord>, GetProjectsError>,
        seen_sort: Arc<Mutex<Option<ProjectSort>>>,
    }

    impl MockGetProjects {
        fn new(result: Result<Vec<ProjectRecord>, GetProjectsError>) -> Self {
            Self {
                result,
                seen_sort: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl GetProjectsUseCase for MockGetProjects {
        async fn execute(
            &self,
            sort: ProjectSort,
        ) -> Result<Vec<ProjectRecord>, GetProjectsError> {
            *self.seen_sort.lock().unwrap() = Some(sort);
            self.result.clone()
        }
    }

    async fn call(uc: MockGetProjects, uri: &str) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default().with_get_projects(uc).build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_projects_handler),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_get_projects_defaults_to_title_desc() {
        let uc = MockGetProjects::new(Ok(vec![
            sample_project_record("zeta"),
            sample_project_record("alpha"),
        ]));
        let seen = Arc::clone(&uc.seen_sort);

        let (status, body) = call(uc, "/api/projects").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(*seen.lock().unwrap(), Some(ProjectSort::TitleDesc));
    }

    #[actix_web::test]
    async fn test_get_projects_accepts_sort_param() {
        let uc = MockGetProjects::new(Ok(vec![]));
        let seen = Arc::clone(&uc.seen_sort);

        let (status, _) = call(uc, "/api/projects?sort=newest").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(*seen.lock().unwrap(), Some(ProjectSort::Newest));
    }

    #[actix_web::test]
    async fn test_get_projects_store_failure_is_400() {
        let uc = MockGetProjects::new(Err(GetProjectsError::QueryFailed(
            "Store unavailable: refused".to_string(),
        )));

        let (status, body) = call(uc, "/api/projects").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }
}
