use crate::api::schemas::{DeletedAck, ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::admin::adapter::incoming::web::routes::{
    AdminSessionResponse, LoginAdminRequestDto, LoginAdminResponseDto,
};
use crate::modules::article::adapter::incoming::web::routes::{ArticleRequest, PatchArticleRequest};
use crate::modules::article::domain::entities::ArticleRecord;
use crate::modules::project::adapter::incoming::web::routes::{PatchProjectRequest, ProjectRequest};
use crate::modules::project::domain::entities::ProjectRecord;
use crate::modules::resume::domain::entities::{Contact, Education, Experience, Resume};
use crate::modules::site::adapter::incoming::web::routes::PageResponse;
use crate::modules::site::domain::pages::{
    AboutProps, ArticleProps, ArticlesProps, IndexProps, ProjectProps, ProjectsProps,
};
use crate::modules::stats::domain::entities::{GithubStats, LanguageCount, LeetCodeStats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Content, page data and profile stats for the portfolio site",
    ),
    paths(
        // Admin endpoints
        crate::modules::admin::adapter::incoming::web::routes::login_admin_handler,
        crate::modules::admin::adapter::incoming::web::routes::admin_session_handler,

        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::replace_project_handler,
        crate::modules::project::adapter::incoming::web::routes::patch_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,

        // Article endpoints
        crate::modules::article::adapter::incoming::web::routes::get_articles_handler,
        crate::modules::article::adapter::incoming::web::routes::get_single_article_handler,
        crate::modules::article::adapter::incoming::web::routes::create_article_handler,
        crate::modules::article::adapter::incoming::web::routes::replace_article_handler,
        crate::modules::article::adapter::incoming::web::routes::patch_article_handler,
        crate::modules::article::adapter::incoming::web::routes::delete_article_handler,

        // Resume endpoints
        crate::modules::resume::adapter::incoming::web::routes::get_resume_handler,
        crate::modules::resume::adapter::incoming::web::routes::update_resume_handler,

        // Stats endpoints
        crate::modules::stats::adapter::incoming::web::routes::get_stats_handler,

        // Page endpoints
        crate::modules::site::adapter::incoming::web::routes::index_page_handler,
        crate::modules::site::adapter::incoming::web::routes::about_page_handler,
        crate::modules::site::adapter::incoming::web::routes::projects_page_handler,
        crate::modules::site::adapter::incoming::web::routes::project_page_handler,
        crate::modules::site::adapter::incoming::web::routes::articles_page_handler,
        crate::modules::site::adapter::incoming::web::routes::article_page_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            DeletedAck,

            // Admin DTOs
            LoginAdminRequestDto,
            LoginAdminResponseDto,
            AdminSessionResponse,

            // Content
            ProjectRecord,
            ProjectRequest,
            PatchProjectRequest,
            ArticleRecord,
            ArticleRequest,
            PatchArticleRequest,
            Resume,
            Contact,
            Experience,
            Education,

            // Stats
            GithubStats,
            LanguageCount,
            LeetCodeStats,

            // Pages
            PageResponse,
            IndexProps,
            AboutProps,
            ProjectsProps,
            ProjectProps,
            ArticlesProps,
            ArticleProps
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "admin", description = "Admin sign-in"),
        (name = "projects", description = "Project management endpoints"),
        (name = "articles", description = "Article management endpoints"),
        (name = "resume", description = "Resume document"),
        (name = "stats", description = "GitHub and LeetCode profile stats"),
        (name = "pages", description = "Props for the public pages, regenerated in the background"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from POST /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}
