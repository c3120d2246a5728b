use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::article::domain::entities::ArticleRecord;
use crate::modules::project::domain::entities::ProjectRecord;
use crate::modules::resume::domain::entities::Resume;

/// Number of entries the landing page shows per section.
pub const INDEX_HIGHLIGHTS: usize = 3;

/// Every public page the site serves. Parametrized pages carry their slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageRoute {
    Index,
    About,
    Projects,
    Project(String),
    Articles,
    Article(String),
}

impl PageRoute {
    pub fn project(slug: &str) -> Self {
        PageRoute::Project(slug.trim().to_lowercase())
    }

    pub fn article(slug: &str) -> Self {
        PageRoute::Article(slug.trim().to_lowercase())
    }

    /// The static pages, i.e. those without a slug parameter.
    pub fn fixed() -> [PageRoute; 4] {
        [
            PageRoute::Index,
            PageRoute::About,
            PageRoute::Projects,
            PageRoute::Articles,
        ]
    }
}

impl fmt::Display for PageRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRoute::Index => f.write_str("/pages/index"),
            PageRoute::About => f.write_str("/pages/about"),
            PageRoute::Projects => f.write_str("/pages/projects"),
            PageRoute::Project(slug) => write!(f, "/pages/projects/{slug}"),
            PageRoute::Articles => f.write_str("/pages/articles"),
            PageRoute::Article(slug) => write!(f, "/pages/articles/{slug}"),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Props
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndexProps {
    pub featured_projects: Vec<ProjectRecord>,
    pub recent_articles: Vec<ArticleRecord>,
}

/// `resume` is `null` while nothing is stored; the page renders a
/// placeholder rather than a 404.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AboutProps {
    pub resume: Option<Resume>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectsProps {
    pub projects: Vec<ProjectRecord>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectProps {
    pub project: ProjectRecord,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticlesProps {
    pub articles: Vec<ArticleRecord>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleProps {
    pub article: ArticleRecord,
}
