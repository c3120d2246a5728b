// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::domain::entities::ProjectRecord;
use crate::shared::patch::PatchField;
use crate::shared::validation::{
    validate_max_len, validate_required, validate_slug, ValidationError, MAX_TITLE_LEN,
};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Full project content, used for create and for whole-record replace.
#[derive(Debug, Clone)]
pub struct ProjectData {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub image: Option<String>,
}

impl ProjectData {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_slug(&self.slug)?;
        validate_required("title", &self.title)?;
        validate_max_len("title", self.title.trim(), MAX_TITLE_LEN)?;
        validate_required("description", &self.description)?;
        Ok(())
    }
}

/// Patch semantics:
/// - slug/title/description/tags: Unset => keep, Value => replace
/// - link/github/image: Unset => keep, Null => clear, Value => set
#[derive(Debug, Clone, Default)]
pub struct PatchProjectData {
    pub slug: PatchField<String>,
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub tags: PatchField<Vec<String>>,
    pub link: PatchField<String>,
    pub github: PatchField<String>,
    pub image: PatchField<String>,
}

impl PatchProjectData {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(slug) = self.slug.as_value() {
            validate_slug(slug)?;
        }
        if let Some(title) = self.title.as_value() {
            validate_required("title", title)?;
            validate_max_len("title", title.trim(), MAX_TITLE_LEN)?;
        }
        if let Some(description) = self.description.as_value() {
            validate_required("description", description)?;
        }
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    /// Unique slug index violated on insert or update.
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, data: ProjectData)
        -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn replace_project(
        &self,
        id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn patch_project(
        &self,
        id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> ProjectData {
        ProjectData {
            slug: "my-project".to_string(),
            title: "My Project".to_string(),
            description: "desc".to_string(),
            tags: vec!["rust".to_string()],
            link: None,
            github: None,
            image: None,
        }
    }

    #[test]
    fn test_valid_data_passes() {
        assert!(data().validate().is_ok());
    }

    #[test]
    fn test_missing_title_fails() {
        let mut d = data();
        d.title = "  ".to_string();
        assert_eq!(d.validate(), Err(ValidationError::Required("title")));
    }

    #[test]
    fn test_patch_only_checks_provided_fields() {
        let patch = PatchProjectData {
            link: PatchField::Null,
            ..Default::default()
        };
        assert!(patch.validate().is_ok());

        let bad = PatchProjectData {
            slug: PatchField::Value("bad slug".to_string()),
            ..Default::default()
        };
        assert_eq!(bad.validate(), Err(ValidationError::InvalidSlug));
    }
}
