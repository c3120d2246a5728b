use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{DatabaseBackend, DbErr, EntityTrait, Statement};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::modules::resume::adapter::outgoing::sea_orm_entity::resume::{self, Entity};
use crate::modules::resume::application::ports::outgoing::{
    ResumeRepository, ResumeRepositoryError,
};
use crate::modules::resume::domain::entities::Resume;
use crate::shared::db::{DocumentStore, StoreError};

/// Well-known key of the one resume row.
pub const RESUME_KEY: &str = "resume";

#[derive(Clone)]
pub struct ResumeRepositoryPostgres {
    store: DocumentStore,
}

impl ResumeRepositoryPostgres {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    fn upsert_stmt(document: JsonValue, now: DateTime<FixedOffset>) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO resume (key, document, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE SET
                document = EXCLUDED.document,
                updated_at = EXCLUDED.updated_at
            RETURNING key, document, updated_at
            "#,
            vec![RESUME_KEY.into(), document.into(), now.into()],
        )
    }
}

#[async_trait]
impl ResumeRepository for ResumeRepositoryPostgres {
    async fn get(&self) -> Result<Option<Resume>, ResumeRepositoryError> {
        let db = self.store.connect().await.map_err(map_store_err)?;

        let model = Entity::find_by_id(RESUME_KEY.to_string())
            .one(&*db)
            .await
            .map_err(map_db_err)?;

        model.map(model_to_resume).transpose()
    }

    async fn upsert(&self, resume: Resume) -> Result<Resume, ResumeRepositoryError> {
        let document = serde_json::to_value(&resume)
            .map_err(|e| ResumeRepositoryError::SerializationError(e.to_string()))?;

        let db = self.store.connect().await.map_err(map_store_err)?;

        let saved = Entity::find()
            .from_raw_sql(Self::upsert_stmt(document, Utc::now().fixed_offset()))
            .one(&*db)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| {
                ResumeRepositoryError::DatabaseError("upsert returned no row".to_string())
            })?;

        debug!(updated_at = %saved.updated_at, "Resume document stored");
        model_to_resume(saved)
    }
}

fn model_to_resume(model: resume::Model) -> Result<Resume, ResumeRepositoryError> {
    serde_json::from_value(model.document)
        .map_err(|e| ResumeRepositoryError::SerializationError(e.to_string()))
}

fn map_store_err(e: StoreError) -> ResumeRepositoryError {
    ResumeRepositoryError::StoreUnavailable(e.to_string())
}

fn map_db_err(e: DbErr) -> ResumeRepositoryError {
    ResumeRepositoryError::DatabaseError(e.to_string())
}
