pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config as RedisConfig, Runtime};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::config::{AppConfig, StatsConfig};
use crate::modules::admin::adapter::outgoing::jwt::JwtTokenService;
use crate::modules::admin::adapter::outgoing::security::Argon2Hasher;
use crate::modules::admin::application::ports::outgoing::TokenProvider;
use crate::modules::admin::application::use_cases::login_admin::{
    LoginAdminService, LoginAdminUseCase,
};
use crate::modules::article::adapter::outgoing::{ArticleQueryPostgres, ArticleRepositoryPostgres};
use crate::modules::article::application::article_use_cases::ArticleUseCases;
use crate::modules::article::application::service::{
    CreateArticleService, DeleteArticleService, GetArticlesService, GetSingleArticleService,
    PatchArticleService, ReplaceArticleService,
};
use crate::modules::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetSingleProjectService,
    PatchProjectService, ReplaceProjectService,
};
use crate::modules::resume::adapter::outgoing::ResumeRepositoryPostgres;
use crate::modules::resume::application::resume_use_cases::ResumeUseCases;
use crate::modules::resume::application::service::{GetResumeService, UpdateResumeService};
use crate::modules::site::application::{ContentService, SitePages};
use crate::modules::stats::adapter::outgoing::{
    GithubStatsClient, InMemoryStatsCacheStore, LeetCodeStatsClient, RedisStatsCacheStore,
    SystemClock,
};
use crate::modules::stats::application::ports::incoming::use_cases::GetStatsUseCase;
use crate::modules::stats::application::ports::outgoing::{StatsCacheStore, StatsFetcher};
use crate::modules::stats::application::service::StatsCacheService;
use crate::shared::api::custom_json_config;
use crate::shared::db::{apply_migrations, DocumentStore, PostgresConnectionFactory};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub article: ArticleUseCases,
    pub resume: ResumeUseCases,
    pub login_admin: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub stats: Arc<dyn GetStatsUseCase + Send + Sync>,
    pub site: Arc<SitePages>,
}

fn startup_error(e: impl std::fmt::Display) -> std::io::Error {
    error!("Startup failed: {}", e);
    std::io::Error::other(e.to_string())
}

#[cfg(not(tarpaulin_include))]
fn stats_cache_store(config: &StatsConfig) -> Arc<dyn StatsCacheStore> {
    let Some(url) = &config.redis_url else {
        info!("REDIS_URL not set, stats cache is in-process");
        return Arc::new(InMemoryStatsCacheStore::new(config.cache_ttl));
    };

    match RedisConfig::from_url(url).create_pool(Some(Runtime::Tokio1)) {
        Ok(pool) => Arc::new(RedisStatsCacheStore::new(Arc::new(pool), config.cache_ttl)),
        Err(e) => {
            warn!(error = %e, "Redis pool unavailable, falling back to in-process stats cache");
            Arc::new(InMemoryStatsCacheStore::new(config.cache_ttl))
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::load().map_err(startup_error)?;
    let server_url = config.server_url();

    // Document store. An unreachable database is not fatal: reads degrade
    // and every request retries the connection.
    let store = DocumentStore::new(Arc::new(PostgresConnectionFactory::new(&config.database)));
    match store.connect().await {
        Ok(_) if config.database.run_migrations => {
            apply_migrations(&store).await.map_err(startup_error)?;
        }
        Ok(_) => info!("DB_RUN_MIGRATIONS=false, skipping schema migrations"),
        Err(e) => warn!(error = %e, "Document store unreachable at startup, migrations not applied"),
    }

    let project_repo = ProjectRepositoryPostgres::new(store.clone());
    let project_query = ProjectQueryPostgres::new(store.clone());
    let article_repo = ArticleRepositoryPostgres::new(store.clone());
    let article_query = ArticleQueryPostgres::new(store.clone());
    let resume_repo = ResumeRepositoryPostgres::new(store.clone());

    let project = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(project_repo.clone())),
        get_list: Arc::new(GetProjectsService::new(project_query.clone())),
        get_single: Arc::new(GetSingleProjectService::new(project_query.clone())),
        replace: Arc::new(ReplaceProjectService::new(project_repo.clone())),
        patch: Arc::new(PatchProjectService::new(project_repo.clone())),
        delete: Arc::new(DeleteProjectService::new(project_repo)),
    };

    let article = ArticleUseCases {
        create: Arc::new(CreateArticleService::new(article_repo.clone())),
        get_list: Arc::new(GetArticlesService::new(article_query.clone())),
        get_single: Arc::new(GetSingleArticleService::new(article_query.clone())),
        replace: Arc::new(ReplaceArticleService::new(article_repo.clone())),
        patch: Arc::new(PatchArticleService::new(article_repo.clone())),
        delete: Arc::new(DeleteArticleService::new(article_repo)),
    };

    let resume = ResumeUseCases {
        get: Arc::new(GetResumeService::new(resume_repo.clone())),
        update: Arc::new(UpdateResumeService::new(resume_repo.clone())),
    };

    // Admin
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let hasher = Argon2Hasher::from_env().map_err(startup_error)?;
    let login_admin = LoginAdminService::new(
        config.admin.clone(),
        Arc::new(hasher),
        token_provider.clone(),
    );

    // Stats
    let github = GithubStatsClient::new(
        &config.stats.github_api_base,
        config.stats.github_token.clone(),
        config.stats.http_timeout,
    )
    .map_err(startup_error)?;
    let leetcode =
        LeetCodeStatsClient::new(&config.stats.leetcode_graphql_url, config.stats.http_timeout)
            .map_err(startup_error)?;
    let fetchers: Vec<Arc<dyn StatsFetcher>> = vec![Arc::new(github), Arc::new(leetcode)];
    let stats = StatsCacheService::new(
        stats_cache_store(&config.stats),
        fetchers,
        Arc::new(SystemClock),
        config.stats.cache_ttl,
    );

    // Pages
    let content = ContentService::new(
        Arc::new(project_query),
        Arc::new(article_query),
        Arc::new(resume_repo),
    );
    let site = Arc::new(SitePages::new(content, config.page_revalidate));
    site.warm().await;

    let state = AppState {
        project,
        article,
        resume,
        login_admin: Arc::new(login_admin),
        stats: Arc::new(stats),
        site,
    };

    let store_for_server = store.clone();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(store_for_server.clone()))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    store.close().await;
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{admin, article, project, resume, site, stats};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Admin
    cfg.service(admin::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(admin::adapter::incoming::web::routes::admin_session_handler);
    // Projects
    cfg.service(project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(project::adapter::incoming::web::routes::replace_project_handler);
    cfg.service(project::adapter::incoming::web::routes::patch_project_handler);
    cfg.service(project::adapter::incoming::web::routes::delete_project_handler);
    // Articles
    cfg.service(article::adapter::incoming::web::routes::get_articles_handler);
    cfg.service(article::adapter::incoming::web::routes::get_single_article_handler);
    cfg.service(article::adapter::incoming::web::routes::create_article_handler);
    cfg.service(article::adapter::incoming::web::routes::replace_article_handler);
    cfg.service(article::adapter::incoming::web::routes::patch_article_handler);
    cfg.service(article::adapter::incoming::web::routes::delete_article_handler);
    // Resume
    cfg.service(resume::adapter::incoming::web::routes::get_resume_handler);
    cfg.service(resume::adapter::incoming::web::routes::update_resume_handler);
    // Stats
    cfg.service(stats::adapter::incoming::web::routes::get_stats_handler);
    // Pages
    cfg.service(site::adapter::incoming::web::routes::index_page_handler);
    cfg.service(site::adapter::incoming::web::routes::about_page_handler);
    cfg.service(site::adapter::incoming::web::routes::projects_page_handler);
    cfg.service(site::adapter::incoming::web::routes::project_page_handler);
    cfg.service(site::adapter::incoming::web::routes::articles_page_handler);
    cfg.service(site::adapter::incoming::web::routes::article_page_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
