use actix_web::{get, web, HttpResponse, Responder};

use super::page_response::{page_response, PageResponse};
use crate::api::schemas::ErrorResponse;
use crate::modules::site::domain::pages::PageRoute;
use crate::AppState;

async fn serve(data: &AppState, route: PageRoute) -> HttpResponse {
    let served = data.site.render(route).await;
    page_response(served, data.site.revalidate_secs())
}

/// Landing page: three featured projects and the three latest articles
#[utoipa::path(
    get,
    path = "/pages/index",
    tag = "pages",
    responses(
        (status = 200, description = "`IndexProps`", body = PageResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse),
    )
)]
#[get("/pages/index")]
pub async fn index_page_handler(data: web::Data<AppState>) -> impl Responder {
    serve(&data, PageRoute::Index).await
}

/// About page. `props.resume` is null until a resume is stored
#[utoipa::path(
    get,
    path = "/pages/about",
    tag = "pages",
    responses(
        (status = 200, description = "`AboutProps`", body = PageResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse),
    )
)]
#[get("/pages/about")]
pub async fn about_page_handler(data: web::Data<AppState>) -> impl Responder {
    serve(&data, PageRoute::About).await
}

#[utoipa::path(
    get,
    path = "/pages/projects",
    tag = "pages",
    responses(
        (status = 200, description = "`ProjectsProps`, ordered by title descending", body = PageResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse),
    )
)]
#[get("/pages/projects")]
pub async fn projects_page_handler(data: web::Data<AppState>) -> impl Responder {
    serve(&data, PageRoute::Projects).await
}

#[utoipa::path(
    get,
    path = "/pages/articles",
    tag = "pages",
    responses(
        (status = 200, description = "`ArticlesProps`, newest date first", body = PageResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse),
    )
)]
#[get("/pages/articles")]
pub async fn articles_page_handler(data: web::Data<AppState>) -> impl Responder {
    serve(&data, PageRoute::Articles).await
}
