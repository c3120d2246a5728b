// src/shared/db/schema.rs

use migration::{Migrator, MigratorTrait};
use tracing::{error, info};

use super::connector::{DocumentStore, StoreError};

/// Brings the schema up to date: tables, the case-insensitive slug
/// indexes and the `updated_at` triggers. Already-applied migrations are
/// skipped.
pub async fn apply_migrations(store: &DocumentStore) -> Result<(), StoreError> {
    let db = store.connect().await?;

    let pending = Migrator::get_pending_migrations(&*db)
        .await
        .map_err(|e| StoreError::DatabaseError(e.to_string()))?
        .len();

    if pending == 0 {
        info!("Schema is up to date");
        return Ok(());
    }

    info!(pending, "Applying schema migrations");
    Migrator::up(&*db, None).await.map_err(|e| {
        error!(error = %e, "Schema migration failed");
        StoreError::DatabaseError(e.to_string())
    })
}
