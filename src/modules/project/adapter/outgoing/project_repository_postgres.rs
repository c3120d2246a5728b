use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    PatchProjectData, ProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::project::domain::entities::ProjectRecord;
use crate::shared::db::{DocumentStore, StoreError};
use crate::shared::patch::PatchField;
use crate::shared::validation::normalize_slug;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    store: DocumentStore,
}

impl ProjectRepositoryPostgres {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: ProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(normalize_slug(&data.slug)),
            title: Set(data.title.trim().to_string()),
            description: Set(data.description),
            tags: Set(to_json(&data.tags)?),
            link: Set(data.link),
            github: Set(data.github),
            image: Set(data.image),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*db).await.map_err(map_slug_error)?;

        model_to_record(result)
    }

    async fn replace_project(
        &self,
        id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;

        let model = ActiveModel {
            slug: Set(normalize_slug(&data.slug)),
            title: Set(data.title.trim().to_string()),
            description: Set(data.description),
            tags: Set(to_json(&data.tags)?),
            link: Set(data.link),
            github: Set(data.github),
            image: Set(data.image),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*db)
            .await
            .map_err(map_slug_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_record(result)
    }

    async fn patch_project(
        &self,
        id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(slug) = data.slug {
            model.slug = Set(normalize_slug(&slug));
        }

        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }

        if let PatchField::Value(desc) = data.description {
            model.description = Set(desc);
        }

        if let PatchField::Value(tags) = data.tags {
            model.tags = Set(to_json(&tags)?);
        }

        model.link = patch_optional(data.link);
        model.github = patch_optional(data.github);
        model.image = patch_optional(data.image);

        let has_changes = model.slug.is_set()
            || model.title.is_set()
            || model.description.is_set()
            || model.tags.is_set()
            || model.link.is_set()
            || model.github.is_set()
            || model.image.is_set();

        if !has_changes {
            let result = Entity::find_by_id(id)
                .one(&*db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return model_to_record(result);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*db)
            .await
            .map_err(map_slug_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_record(result)
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;

        let result = Entity::delete_by_id(id)
            .exec(&*db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn patch_optional(field: PatchField<String>) -> sea_orm::ActiveValue<Option<String>> {
    match field {
        PatchField::Unset => sea_orm::ActiveValue::NotSet,
        PatchField::Null => Set(None),
        PatchField::Value(v) => Set(Some(v)),
    }
}

fn model_to_record(model: projects::Model) -> Result<ProjectRecord, ProjectRepositoryError> {
    let tags: Vec<String> = serde_json::from_value(model.tags)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))?;

    Ok(ProjectRecord {
        id: model.id.to_string(),
        slug: model.slug,
        title: model.title,
        description: model.description,
        tags,
        link: model.link,
        github: model.github,
        image: model.image,
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_slug_error(e: DbErr) -> ProjectRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ProjectRepositoryError::SlugAlreadyExists
    } else {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

fn map_store_err(e: StoreError) -> ProjectRepositoryError {
    ProjectRepositoryError::StoreUnavailable(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
