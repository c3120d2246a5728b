use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use super::content_service::ContentService;
use super::page_cache::{PageCache, PageOutcome, Served};
use crate::modules::article::application::ports::outgoing::ArticleSort;
use crate::modules::project::application::ports::outgoing::ProjectSort;
use crate::modules::site::domain::pages::{
    AboutProps, ArticleProps, ArticlesProps, IndexProps, PageRoute, ProjectProps, ProjectsProps,
    INDEX_HIGHLIGHTS,
};

/// Page data for every public page, served through the regeneration cache.
pub struct SitePages {
    content: ContentService,
    cache: Arc<PageCache>,
}

fn found<T: Serialize>(route: &PageRoute, props: T) -> PageOutcome {
    match serde_json::to_value(props) {
        Ok(value) => PageOutcome::Found(Arc::new(value)),
        Err(e) => PageOutcome::Failed(format!("{route}: {e}")),
    }
}

async fn generate(content: ContentService, route: PageRoute) -> PageOutcome {
    match &route {
        PageRoute::Index => {
            let mut featured_projects = content.list_projects_sorted(ProjectSort::TitleDesc).await;
            featured_projects.truncate(INDEX_HIGHLIGHTS);
            let mut recent_articles = content.list_articles_sorted(ArticleSort::DateDesc).await;
            recent_articles.truncate(INDEX_HIGHLIGHTS);

            found(
                &route,
                IndexProps {
                    featured_projects,
                    recent_articles,
                },
            )
        }
        PageRoute::About => found(
            &route,
            AboutProps {
                resume: content.get_resume().await,
            },
        ),
        PageRoute::Projects => found(
            &route,
            ProjectsProps {
                projects: content.list_projects().await,
            },
        ),
        PageRoute::Project(slug) => match content.get_project_by_slug(slug).await {
            Some(project) => found(&route, ProjectProps { project }),
            None => PageOutcome::NotFound,
        },
        PageRoute::Articles => found(
            &route,
            ArticlesProps {
                articles: content.list_articles_sorted(ArticleSort::DateDesc).await,
            },
        ),
        PageRoute::Article(slug) => match content.get_article_by_slug(slug).await {
            Some(article) => found(&route, ArticleProps { article }),
            None => PageOutcome::NotFound,
        },
    }
}

impl SitePages {
    pub fn new(content: ContentService, revalidate: Duration) -> Self {
        Self {
            content,
            cache: Arc::new(PageCache::new(revalidate)),
        }
    }

    pub fn revalidate_secs(&self) -> u64 {
        self.cache.revalidate().as_secs()
    }

    /// Generates props for `route` straight from the store, bypassing the
    /// cache.
    pub async fn build_props(&self, route: &PageRoute) -> PageOutcome {
        generate(self.content.clone(), route.clone()).await
    }

    /// Every parametrized page known right now.
    pub async fn build_param_set(&self) -> Vec<PageRoute> {
        let projects = self.content.project_slugs().await;
        let articles = self.content.article_slugs().await;

        projects
            .iter()
            .map(|slug| PageRoute::project(slug))
            .chain(articles.iter().map(|slug| PageRoute::article(slug)))
            .collect()
    }

    pub async fn render(&self, route: PageRoute) -> Served {
        let key = route.to_string();
        let content = self.content.clone();
        self.cache
            .serve(&key, move || generate(content, route))
            .await
    }

    /// Generates every fixed page plus one page per known slug. Returns how
    /// many pages ended up cached.
    pub async fn warm(&self) -> usize {
        let mut routes: Vec<PageRoute> = PageRoute::fixed().into_iter().collect();
        routes.extend(self.build_param_set().await);

        let mut generated = 0;
        for route in routes {
            let key = route.to_string();
            let content = self.content.clone();
            match self.cache.regenerate(&key, move || generate(content, route)).await {
                PageOutcome::Found(_) => generated += 1,
                PageOutcome::NotFound => warn!(page = %key, "Listed slug has no record"),
                PageOutcome::Failed(reason) => warn!(page = %key, %reason, "Warm-up failed"),
            }
        }

        info!(pages = generated, "Page cache warmed");
        generated
    }

    /// Called after every admin write.
    pub fn expire_all(&self) {
        self.cache.expire_all();
    }
}
