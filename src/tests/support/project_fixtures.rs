use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError, ProjectSort,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    PatchProjectData, ProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::domain::entities::ProjectRecord;

pub fn sample_project_record(slug: &str) -> ProjectRecord {
    ProjectRecord {
        id: Uuid::new_v4().to_string(),
        slug: slug.to_string(),
        title: format!("Project {}", slug),
        description: "A small thing I built".to_string(),
        tags: vec!["rust".to_string()],
        link: None,
        github: Some(format!("https://github.com/someone/{}", slug)),
        image: None,
    }
}

pub fn sample_project_data() -> ProjectData {
    ProjectData {
        slug: "my-project".to_string(),
        title: "My Project".to_string(),
        description: "A small thing I built".to_string(),
        tags: vec!["rust".to_string(), "actix".to_string()],
        link: None,
        github: None,
        image: None,
    }
}

//
// ──────────────────────────────────────────────────────────
// Command-side mock
// ──────────────────────────────────────────────────────────
//

/// Returns the same canned result for every write and counts calls.
#[derive(Clone)]
pub struct MockProjectRepo {
    result: Result<ProjectRecord, ProjectRepositoryError>,
    calls: Arc<AtomicUsize>,
}

impl MockProjectRepo {
    pub fn ok(slug: &str) -> Self {
        Self {
            result: Ok(sample_project_record(slug)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn err(error: ProjectRepositoryError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next(&self) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepo {
    async fn create_project(
        &self,
        _data: ProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.next()
    }

    async fn replace_project(
        &self,
        _id: Uuid,
        _data: ProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.next()
    }

    async fn patch_project(
        &self,
        _id: Uuid,
        _data: PatchProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        self.next()
    }

    async fn delete_project(&self, _id: Uuid) -> Result<(), ProjectRepositoryError> {
        self.next().map(|_| ())
    }
}

//
// ──────────────────────────────────────────────────────────
// Query-side mock
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct MockProjectQuery {
    projects: Result<Vec<ProjectRecord>, ProjectQueryError>,
    last_sort: Arc<Mutex<Option<ProjectSort>>>,
}

impl MockProjectQuery {
    pub fn with_projects(projects: Vec<ProjectRecord>) -> Self {
        Self {
            projects: Ok(projects),
            last_sort: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing(error: ProjectQueryError) -> Self {
        Self {
            projects: Err(error),
            last_sort: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_sort(&self) -> Option<ProjectSort> {
        *self.last_sort.lock().unwrap()
    }
}

#[async_trait]
impl ProjectQuery for MockProjectQuery {
    async fn list(&self, sort: ProjectSort) -> Result<Vec<ProjectRecord>, ProjectQueryError> {
        *self.last_sort.lock().unwrap() = Some(sort);
        self.projects.clone()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<ProjectRecord>, ProjectQueryError> {
        let id = id.to_string();
        Ok(self.projects.clone()?.into_iter().find(|p| p.id == id))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<ProjectRecord>, ProjectQueryError> {
        let slug = slug.to_lowercase();
        Ok(self.projects.clone()?.into_iter().find(|p| p.slug == slug))
    }

    async fn list_slugs(&self) -> Result<Vec<String>, ProjectQueryError> {
        Ok(self.projects.clone()?.into_iter().map(|p| p.slug).collect())
    }
}
