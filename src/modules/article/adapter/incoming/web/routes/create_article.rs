use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::article::application::ports::incoming::use_cases::CreateArticleError;
use crate::modules::article::application::ports::outgoing::article_repository::ArticleData;
use crate::modules::article::domain::entities::ArticleRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Full article body, shared by create (POST) and replace (PUT).
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRequest {
    #[schema(example = "async-rust-in-practice")]
    pub slug: String,
    pub title: String,
    #[schema(example = "2024-01-15")]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub content: String,
    pub cover_image: Option<String>,
}

impl From<ArticleRequest> for ArticleData {
    fn from(req: ArticleRequest) -> Self {
        ArticleData {
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

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Publish an article
#[utoipa::path(
    post,
    path = "/api/articles",
    tag = "articles",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article created", body = inline(SuccessResponse<ArticleRecord>)),
        (status = 400, description = "Validation or store error", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/articles")]
pub async fn create_article_handler(
    _admin: AdminSession,
    req: web::Json<ArticleRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.article.create.execute(req.into_inner().into()).await {
        Ok(created) => {
            info!(slug = %created.slug, "Article created");
            data.site.expire_all();
            ApiResponse::created(created)
        }

        Err(CreateArticleError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateArticleError::SlugAlreadyExists) => {
            ApiResponse::bad_request("SLUG_ALREADY_EXISTS", "Article slug already exists")
        }

        Err(CreateArticleError::RepositoryError(e)) => {
            error!("Repository error creating article: {}", e);
            ApiResponse::store_error(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::modules::article::application::ports::incoming::use_cases::CreateArticleUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, test_token_provider};
    use crate::tests::support::article_fixtures::sample_article_record;

    /* --------------------------------------------------
     * Mock Create Article Use Case
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockCreateArticleUseCase {
        result: Result<ArticleRecord, CreateArticleError>,
        calls: Arc<AtomicUsize>,
    }

    impl MockCreateArticleUseCase {
        fn success(data: ArticleRecord) -> Self {
            Self {
                result: Ok(data),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn error(err: CreateArticleError) -> Self {
            Self {
                result: Err(err),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl CreateArticleUseCase for MockCreateArticleUseCase {
        async fn execute(&self, _data: ArticleData) -> Result<ArticleRecord, CreateArticleError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    /* --------------------------------------------------
     * Helpers
     * -------------------------------------------------- */

    fn base_create_request() -> ArticleRequest {
        ArticleRequest {
            slug: "my-article".to_string(),
            title: "My Article".to_string(),
            date: "2024-01-15".to_string(),
            description: "desc".to_string(),
            tags: vec!["Rust".to_string()],
            content: "# Hello".to_string(),
            cover_image: None,
        }
    }

    async fn call(
        uc: MockCreateArticleUseCase,
        auth: Option<String>,
    ) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_article(uc)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(create_article_handler),
        )
        .await;

        let mut req = test::TestRequest::post()
            .uri("/api/articles")
            .set_json(&base_create_request());
        if let Some(h) = auth {
            req = req.insert_header(("Authorization", h));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    /* --------------------------------------------------
     * Success Case
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_article_success() {
        let uc = MockCreateArticleUseCase::success(sample_article_record("my-article"));

        let (status, body) = call(uc, Some(admin_bearer())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["slug"], "my-article");
        assert!(body["data"]["id"].is_string());
        assert_eq!(body["data"]["date"], "2024-01-15");
        assert!(body["data"].get("coverImage").is_none());
    }

    /* --------------------------------------------------
     * Error Cases
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_article_slug_exists_is_400() {
        let uc = MockCreateArticleUseCase::error(CreateArticleError::SlugAlreadyExists);

        let (status, body) = call(uc, Some(admin_bearer())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "SLUG_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_create_article_validation_is_400() {
        let uc = MockCreateArticleUseCase::error(CreateArticleError::Validation(
            "date is required".to_string(),
        ));

        let (status, body) = call(uc, Some(admin_bearer())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "date is required");
    }

    #[actix_web::test]
    async fn test_create_article_store_error_carries_message() {
        let uc = MockCreateArticleUseCase::error(CreateArticleError::RepositoryError(
            "db down".to_string(),
        ));

        let (status, body) = call(uc, Some(admin_bearer())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "STORE_ERROR");
        assert_eq!(body["error"]["message"], "db down");
    }

    /* --------------------------------------------------
     * Auth Case
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_create_article_without_session_never_reaches_store() {
        let uc = MockCreateArticleUseCase::success(sample_article_record("my-article"));
        let calls = Arc::clone(&uc.calls);

        let (status, body) = call(uc, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
