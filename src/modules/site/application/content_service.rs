use std::sync::Arc;

use tracing::{error, warn};

use crate::modules::article::application::ports::outgoing::{ArticleQuery, ArticleSort};
use crate::modules::article::domain::entities::ArticleRecord;
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectSort};
use crate::modules::project::domain::entities::ProjectRecord;
use crate::modules::resume::application::ports::outgoing::ResumeRepository;
use crate::modules::resume::domain::entities::Resume;

/// Read side used by page generation.
///
/// Nothing here returns an error: store failures are logged and come back
/// as an empty list or `None`, so a page always has something to render.
#[derive(Clone)]
pub struct ContentService {
    projects: Arc<dyn ProjectQuery>,
    articles: Arc<dyn ArticleQuery>,
    resume: Arc<dyn ResumeRepository>,
}

impl ContentService {
    pub fn new(
        projects: Arc<dyn ProjectQuery>,
        articles: Arc<dyn ArticleQuery>,
        resume: Arc<dyn ResumeRepository>,
    ) -> Self {
        Self {
            projects,
            articles,
            resume,
        }
    }

    /// Ordered by title, descending.
    pub async fn list_projects(&self) -> Vec<ProjectRecord> {
        self.list_projects_sorted(ProjectSort::TitleDesc).await
    }

    pub async fn list_projects_sorted(&self, sort: ProjectSort) -> Vec<ProjectRecord> {
        self.projects.list(sort).await.unwrap_or_else(|e| {
            error!(error = %e, ?sort, "Listing projects failed; serving empty list");
            Vec::new()
        })
    }

    /// Ordered by slug, descending.
    pub async fn list_articles(&self) -> Vec<ArticleRecord> {
        self.list_articles_sorted(ArticleSort::SlugDesc).await
    }

    pub async fn list_articles_sorted(&self, sort: ArticleSort) -> Vec<ArticleRecord> {
        self.articles.list(sort).await.unwrap_or_else(|e| {
            error!(error = %e, ?sort, "Listing articles failed; serving empty list");
            Vec::new()
        })
    }

    pub async fn get_project_by_slug(&self, slug: &str) -> Option<ProjectRecord> {
        self.projects.get_by_slug(slug).await.unwrap_or_else(|e| {
            error!(error = %e, slug, "Project lookup failed");
            None
        })
    }

    pub async fn get_article_by_slug(&self, slug: &str) -> Option<ArticleRecord> {
        self.articles.get_by_slug(slug).await.unwrap_or_else(|e| {
            error!(error = %e, slug, "Article lookup failed");
            None
        })
    }

    pub async fn get_resume(&self) -> Option<Resume> {
        self.resume.get().await.unwrap_or_else(|e| {
            error!(error = %e, "Resume lookup failed");
            None
        })
    }

    pub async fn project_slugs(&self) -> Vec<String> {
        self.projects.list_slugs().await.unwrap_or_else(|e| {
            warn!(error = %e, "Could not enumerate project slugs");
            Vec::new()
        })
    }

    pub async fn article_slugs(&self) -> Vec<String> {
        self.articles.list_slugs().await.unwrap_or_else(|e| {
            warn!(error = %e, "Could not enumerate article slugs");
            Vec::new()
        })
    }
}
