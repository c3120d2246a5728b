use std::sync::Arc;

use actix_web::http::header;
use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::modules::site::application::Served;
use crate::shared::api::ApiResponse;

pub const PAGE_CACHE_HEADER: &str = "x-page-cache";

/// Page data plus the regeneration window the page was built with.
#[derive(Serialize, ToSchema)]
pub struct PageResponse {
    /// One of `IndexProps`, `AboutProps`, `ProjectsProps`, `ProjectProps`,
    /// `ArticlesProps`, `ArticleProps`
    #[schema(value_type = Object)]
    pub props: Arc<Value>,

    /// Seconds
    #[schema(example = 60)]
    pub revalidate: u64,
}

pub(super) fn page_response(served: Served, revalidate: u64) -> HttpResponse {
    match served {
        Served::Page { props, state } => HttpResponse::Ok()
            .insert_header((PAGE_CACHE_HEADER, state.as_str()))
            .insert_header((
                header::CACHE_CONTROL,
                format!("s-maxage={revalidate}, stale-while-revalidate"),
            ))
            .json(PageResponse { props, revalidate }),

        Served::NotFound => ApiResponse::not_found("PAGE_NOT_FOUND", "Page not found"),

        Served::Failed => ApiResponse::internal_error(),
    }
}
