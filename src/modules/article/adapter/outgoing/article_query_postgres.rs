// src/modules/article/adapter/outgoing/article_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select};
use uuid::Uuid;

use crate::modules::article::adapter::outgoing::sea_orm_entity::articles::{self, Column, Entity};
use crate::modules::article::application::ports::outgoing::article_query::{
    ArticleQuery, ArticleQueryError, ArticleSort,
};
use crate::modules::article::domain::entities::ArticleRecord;
use crate::shared::db::{DocumentStore, StoreError};
use crate::shared::validation::normalize_slug;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ArticleQueryPostgres {
    store: DocumentStore,
}

impl ArticleQueryPostgres {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

fn sorted(sort: ArticleSort) -> Select<Entity> {
    match sort {
        ArticleSort::SlugDesc => Entity::find().order_by_desc(Column::Slug),
        // Same-day articles fall back to slug order.
        ArticleSort::DateDesc => Entity::find()
            .order_by_desc(Column::Date)
            .order_by_desc(Column::Slug),
        ArticleSort::Newest => Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id),
    }
}

#[async_trait]
impl ArticleQuery for ArticleQueryPostgres {
    async fn list(&self, sort: ArticleSort) -> Result<Vec<ArticleRecord>, ArticleQueryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;

        sorted(sort)
            .all(&*db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_record)
            .collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<ArticleRecord>, ArticleQueryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;

        Entity::find_by_id(id)
            .one(&*db)
            .await
            .map_err(map_db_err)?
            .map(model_to_record)
            .transpose()
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<ArticleRecord>, ArticleQueryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;

        Entity::find()
            .filter(Column::Slug.eq(normalize_slug(slug)))
            .one(&*db)
            .await
            .map_err(map_db_err)?
            .map(model_to_record)
            .transpose()
    }

    async fn list_slugs(&self) -> Result<Vec<String>, ArticleQueryError> {
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

fn model_to_record(model: articles::Model) -> Result<ArticleRecord, ArticleQueryError> {
    let tags: Vec<String> = serde_json::from_value(model.tags)
        .map_err(|e| ArticleQueryError::SerializationError(e.to_string()))?;

    Ok(ArticleRecord {
        id: model.id.to_string(),
        slug: model.slug,
        title: model.title,
        date: model.date,
        description: model.description,
        tags,
        content: model.content,
        cover_image: model.cover_image,
    })
}

fn map_store_err(e: StoreError) -> ArticleQueryError {
    ArticleQueryError::StoreUnavailable(e.to_string())
}

fn map_db_err(e: DbErr) -> ArticleQueryError {
    ArticleQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
