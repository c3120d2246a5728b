// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{self, Column, Entity};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError, ProjectSort,
};
use crate::modules::project::domain::entities::ProjectRecord;
use crate::shared::db::{DocumentStore, StoreError};
use crate::shared::validation::normalize_slug;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    store: DocumentStore,
}

impl ProjectQueryPostgres {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(&self, sort: ProjectSort) -> Result<Vec<ProjectRecord>, ProjectQueryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;

        let query = match sort {
            ProjectSort::TitleDesc => Entity::find().order_by_desc(Column::Title),
            ProjectSort::TitleAsc => Entity::find().order_by_asc(Column::Title),
            ProjectSort::Newest => Entity::find().order_by_desc(Column::CreatedAt),
        };

        let models = query
            .order_by_asc(Column::Id)
            .all(&*db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_record).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<ProjectRecord>, ProjectQueryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;

        Entity::find_by_id(id)
            .one(&*db)
            .await
            .map_err(map_db_err)?
            .map(model_to_record)
            .transpose()
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<ProjectRecord>, ProjectQueryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;
        let normalized_slug = normalize_slug(slug);

        Entity::find()
            .filter(Column::Slug.eq(normalized_slug))
            .one(&*db)
            .await
            .map_err(map_db_err)?
            .map(model_to_record)
            .transpose()
    }

    async fn list_slugs(&self) -> Result<Vec<String>, ProjectQueryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;

        Entity::find()
            .select_only()
            .column(Column::Slug)
            .order_by_asc(Column::Slug)
            .into_tuple::<String>()
            .all(&*db)
            .await
            .map_err(map_db_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Drops store-internal timestamps and renders the id as a string.
pub(crate) fn model_to_record(model: projects::Model) -> Result<ProjectRecord, ProjectQueryError> {
    let tags: Vec<String> = serde_json::from_value(model.tags)
        .map_err(|e| ProjectQueryError::SerializationError(e.to_string()))?;

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

fn map_store_err(e: StoreError) -> ProjectQueryError {
    ProjectQueryError::StoreUnavailable(e.to_string())
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
