use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::modules::article::adapter::outgoing::sea_orm_entity::articles::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::article::application::ports::outgoing::article_repository::{
    ArticleData, ArticleRepository, ArticleRepositoryError, PatchArticleData,
};
use crate::modules::article::domain::entities::ArticleRecord;
use crate::shared::db::{DocumentStore, StoreError};
use crate::shared::patch::PatchField;
use crate::shared::validation::normalize_slug;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ArticleRepositoryPostgres {
    store: DocumentStore,
}

impl ArticleRepositoryPostgres {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    async fn update_one(
        &self,
        id: Uuid,
        model: ActiveModel,
    ) -> Result<ArticleRecord, ArticleRepositoryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*db)
            .await
            .map_err(map_slug_error)?
            .into_iter()
            .next()
            .ok_or(ArticleRepositoryError::NotFound)?;

        model_to_record(updated)
    }
}

#[async_trait]
impl ArticleRepository for ArticleRepositoryPostgres {
    async fn create_article(
        &self,
        data: ArticleData,
    ) -> Result<ArticleRecord, ArticleRepositoryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            created_at: Set(now),
            ..full_model(data)?
        };

        let created = model.insert(&*db).await.map_err(map_slug_error)?;

        model_to_record(created)
    }

    async fn replace_article(
        &self,
        id: Uuid,
        data: ArticleData,
    ) -> Result<ArticleRecord, ArticleRepositoryError> {
        self.update_one(id, full_model(data)?).await
    }

    async fn patch_article(
        &self,
        id: Uuid,
        data: PatchArticleData,
    ) -> Result<ArticleRecord, ArticleRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(slug) = data.slug {
            model.slug = Set(normalize_slug(&slug));
        }
        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }
        if let PatchField::Value(date) = data.date {
            model.date = Set(date.trim().to_string());
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        if let PatchField::Value(tags) = data.tags {
            model.tags = Set(to_json(&tags)?);
        }
        if let PatchField::Value(content) = data.content {
            model.content = Set(content);
        }
        model.cover_image = match data.cover_image {
            PatchField::Unset => ActiveValue::NotSet,
            PatchField::Null => Set(None),
            PatchField::Value(url) => Set(Some(url)),
        };

        let has_changes = model.slug.is_set()
            || model.title.is_set()
            || model.date.is_set()
            || model.description.is_set()
            || model.tags.is_set()
            || model.content.is_set()
            || model.cover_image.is_set();

        if !has_changes {
            let db = self.store.connect().await.map_err(map_store_err)?;
            let current = Entity::find_by_id(id)
                .one(&*db)
                .await
                .map_err(map_db_err)?
                .ok_or(ArticleRepositoryError::NotFound)?;

            return model_to_record(current);
        }

        model.updated_at = Set(Utc::now().fixed_offset());
        self.update_one(id, model).await
    }

    async fn delete_article(&self, id: Uuid) -> Result<(), ArticleRepositoryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;

        let result = Entity::delete_by_id(id)
            .exec(&*db)
            .await
            .map_err(map_db_err)?;

        match result.rows_affected {
            0 => Err(ArticleRepositoryError::NotFound),
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Every content column set from `data`; id and created_at left untouched.
fn full_model(data: ArticleData) -> Result<ActiveModel, ArticleRepositoryError> {
    Ok(ActiveModel {
        slug: Set(normalize_slug(&data.slug)),
        title: Set(data.title.trim().to_string()),
        date: Set(data.date.trim().to_string()),
        description: Set(data.description),
        tags: Set(to_json(&data.tags)?),
        content: Set(data.content),
        cover_image: Set(data.cover_image),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    })
}

fn model_to_record(model: articles::Model) -> Result<ArticleRecord, ArticleRepositoryError> {
    let tags: Vec<String> = serde_json::from_value(model.tags)
        .map_err(|e| ArticleRepositoryError::SerializationError(e.to_string()))?;

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

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ArticleRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ArticleRepositoryError::SerializationError(e.to_string()))
}

fn map_slug_error(e: DbErr) -> ArticleRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ArticleRepositoryError::SlugAlreadyExists
    } else {
        ArticleRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ArticleRepositoryError {
    ArticleRepositoryError::DatabaseError(e.to_string())
}

fn map_store_err(e: StoreError) -> ArticleRepositoryError {
    ArticleRepositoryError::StoreUnavailable(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
