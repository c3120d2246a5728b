use actix_web::{get, web, Responder};

use super::page_response::{page_response, PageResponse};
use crate::api::schemas::ErrorResponse;
use crate::modules::site::domain::pages::PageRoute;
use crate::AppState;

/// Project detail page. Slugs missing from the warm-up set are generated
/// on first request; the caller waits for that generation.
#[utoipa::path(
    get,
    path = "/pages/projects/{slug}",
    tag = "pages",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "`ProjectProps`", body = PageResponse),
        (status = 404, description = "No project with this slug", body = ErrorResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse),
    )
)]
#[get("/pages/projects/{slug}")]
pub async fn project_page_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let served = data.site.render(PageRoute::project(&path)).await;
    page_response(served, data.site.revalidate_secs())
}

/// Article detail page
#[utoipa::path(
    get,
    path = "/pages/articles/{slug}",
    tag = "pages",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "`ArticleProps`", body = PageResponse),
        (status = 404, description = "No article with this slug", body = ErrorResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse),
    )
)]
#[get("/pages/articles/{slug}")]
pub async fn article_page_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let served = data.site.render(PageRoute::article(&path)).await;
    page_response(served, data.site.revalidate_secs())
}
