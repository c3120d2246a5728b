use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::article::application::ports::incoming::use_cases::GetSingleArticleError;
use crate::modules::article::domain::entities::ArticleRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get an article by id
#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    tag = "articles",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article", body = inline(SuccessResponse<ArticleRecord>)),
        (status = 404, description = "No such article", body = ErrorResponse),
        (status = 400, description = "Store error", body = ErrorResponse),
    )
)]
#[get("/api/articles/{id}")]
pub async fn get_single_article_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let article_id = path.into_inner();

    match data.article.get_single.execute(article_id).await {
        Ok(article) => ApiResponse::success(article),

        Err(GetSingleArticleError::NotFound) => {
            ApiResponse::not_found("ARTICLE_NOT_FOUND", "Article not found")
        }

        Err(GetSingleArticleError::RepositoryError(msg)) => {
            error!(%article_id, "Failed to load article: {}", msg);
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

    use crate::modules::article::application::ports::incoming::use_cases::GetSingleArticleUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::article_fixtures::sample_article_record;

    #[derive(Clone)]
    struct MockGetSingle {
        result: Result<ArticleRecord, GetSingleArticleError>,
    }

    #[async_trait]
    impl GetSingleArticleUseCase for MockGetSingle {
        async fn execute(&self, _id: Uuid) -> Result<ArticleRecord, GetSingleArticleError> {
            self.result.clone()
        }
    }

    async fn call(uc: MockGetSingle, uri: &str) -> (StatusCode, Option<Value>) {
        let app_state = TestAppStateBuilder::default()
            .with_get_single_article(uc)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_single_article_handler),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).ok())
    }

    #[actix_web::test]
    async fn test_get_single_article_found() {
        let uc = MockGetSingle {
            result: Ok(sample_article_record("found")),
        };

        let (status, body) = call(uc, &format!("/api/articles/{}", Uuid::new_v4())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.unwrap()["data"]["slug"], "found");
    }

    #[actix_web::test]
    async fn test_get_single_article_not_found() {
        let uc = MockGetSingle {
            result: Err(GetSingleArticleError::NotFound),
        };

        let (status, body) = call(uc, &format!("/api/articles/{}", Uuid::new_v4())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.unwrap()["error"]["code"], "ARTICLE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_get_single_article_malformed_id_is_404() {
        let uc = MockGetSingle {
            result: Ok(sample_article_record("never")),
        };

        let (status, _) = call(uc, "/api/articles/not-a-uuid").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
