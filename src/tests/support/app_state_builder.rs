use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use crate::modules::admin::application::use_cases::login_admin::LoginAdminUseCase;
use crate::modules::article::application::article_use_cases::ArticleUseCases;
use crate::modules::article::application::ports::incoming::use_cases::{
    CreateArticleUseCase, DeleteArticleUseCase, GetArticlesUseCase, GetSingleArticleUseCase,
    PatchArticleUseCase, ReplaceArticleUseCase,
};
use crate::modules::article::application::service::{
    CreateArticleService, DeleteArticleService, GetArticlesService, GetSingleArticleService,
    PatchArticleService, ReplaceArticleService,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    PatchProjectUseCase, ReplaceProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectsService, GetSingleProjectService,
    PatchProjectService, ReplaceProjectService,
};
use crate::modules::resume::application::ports::incoming::use_cases::{
    GetResumeUseCase, UpdateResumeUseCase,
};
use crate::modules::resume::application::resume_use_cases::ResumeUseCases;
use crate::modules::resume::application::service::{GetResumeService, UpdateResumeService};
use crate::modules::site::application::{ContentService, SitePages};
use crate::modules::stats::application::ports::incoming::use_cases::GetStatsUseCase;
use crate::tests::support::article_fixtures::{MockArticleQuery, MockArticleRepo};
use crate::tests::support::project_fixtures::{MockProjectQuery, MockProjectRepo};
use crate::tests::support::resume_fixtures::MockResumeRepo;
use crate::tests::support::stubs::{StubGetStatsUseCase, StubLoginAdminUseCase};
use crate::AppState;

/// `AppState` for handler tests. Defaults run the real services over empty
/// in-memory stores; override only what a test exercises.
pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    article: ArticleUseCases,
    resume: ResumeUseCases,
    login_admin: Arc<dyn LoginAdminUseCase + Send + Sync>,
    stats: Arc<dyn GetStatsUseCase + Send + Sync>,
    site: Arc<SitePages>,
}

fn empty_site() -> SitePages {
    SitePages::new(
        ContentService::new(
            Arc::new(MockProjectQuery::with_projects(vec![])),
            Arc::new(MockArticleQuery::with_articles(vec![])),
            Arc::new(MockResumeRepo::with(None)),
        ),
        Duration::from_secs(60),
    )
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let project_repo = MockProjectRepo::ok("stub");
        let project_query = MockProjectQuery::with_projects(vec![]);
        let article_repo = MockArticleRepo::ok("stub");
        let article_query = MockArticleQuery::with_articles(vec![]);
        let resume_repo = MockResumeRepo::with(None);

        Self {
            project: ProjectUseCases {
                create: Arc::new(CreateProjectService::new(project_repo.clone())),
                get_list: Arc::new(GetProjectsService::new(project_query.clone())),
                get_single: Arc::new(GetSingleProjectService::new(project_query)),
                replace: Arc::new(ReplaceProjectService::new(project_repo.clone())),
                patch: Arc::new(PatchProjectService::new(project_repo.clone())),
                delete: Arc::new(DeleteProjectService::new(project_repo)),
            },
            article: ArticleUseCases {
                create: Arc::new(CreateArticleService::new(article_repo.clone())),
                get_list: Arc::new(GetArticlesService::new(article_query.clone())),
                get_single: Arc::new(GetSingleArticleService::new(article_query)),
                replace: Arc::new(ReplaceArticleService::new(article_repo.clone())),
                patch: Arc::new(PatchArticleService::new(article_repo.clone())),
                delete: Arc::new(DeleteArticleService::new(article_repo)),
            },
            resume: ResumeUseCases {
                get: Arc::new(GetResumeService::new(resume_repo.clone())),
                update: Arc::new(UpdateResumeService::new(resume_repo)),
            },
            login_admin: Arc::new(StubLoginAdminUseCase),
            stats: Arc::new(StubGetStatsUseCase),
            site: Arc::new(empty_site()),
        }
    }
}

impl TestAppStateBuilder {
    // ── projects ──────────────────────────────────────────

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_replace_project(
        mut self,
        uc: impl ReplaceProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.replace = Arc::new(uc);
        self
    }

    pub fn with_patch_project(
        mut self,
        uc: impl PatchProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    // ── articles ──────────────────────────────────────────

    pub fn with_create_article(
        mut self,
        uc: impl CreateArticleUseCase + Send + Sync + 'static,
    ) -> Self {
        self.article.create = Arc::new(uc);
        self
    }

    pub fn with_get_articles(mut self, uc: impl GetArticlesUseCase + Send + Sync + 'static) -> Self {
        self.article.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_article(
        mut self,
        uc: impl GetSingleArticleUseCase + Send + Sync + 'static,
    ) -> Self {
        self.article.get_single = Arc::new(uc);
        self
    }

    pub fn with_replace_article(
        mut self,
        uc: impl ReplaceArticleUseCase + Send + Sync + 'static,
    ) -> Self {
        self.article.replace = Arc::new(uc);
        self
    }

    pub fn with_patch_article(
        mut self,
        uc: impl PatchArticleUseCase + Send + Sync + 'static,
    ) -> Self {
        self.article.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_article(
        mut self,
        uc: impl DeleteArticleUseCase + Send + Sync + 'static,
    ) -> Self {
        self.article.delete = Arc::new(uc);
        self
    }

    // ── resume ────────────────────────────────────────────

    pub fn with_get_resume(mut self, uc: impl GetResumeUseCase + Send + Sync + 'static) -> Self {
        self.resume.get = Arc::new(uc);
        self
    }

    pub fn with_update_resume(
        mut self,
        uc: impl UpdateResumeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resume.update = Arc::new(uc);
        self
    }

    // ── admin, stats, pages ───────────────────────────────

    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_get_stats(mut self, uc: impl GetStatsUseCase + Send + Sync + 'static) -> Self {
        self.stats = Arc::new(uc);
        self
    }

    pub fn with_site(mut self, site: SitePages) -> Self {
        self.site = Arc::new(site);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            article: self.article,
            resume: self.resume,
            login_admin: self.login_admin,
            stats: self.stats,
            site: self.site,
        })
    }
}
