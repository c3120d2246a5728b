// src/shared/db/connector.rs

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use crate::config::DatabaseConfig;
use crate::shared::lock::mutex_lock;

const SOURCE: &str = "shared::db::connector";

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Opens one physical connection pool. Production uses Postgres; tests plug
/// in `MockDatabase` connections.
#[async_trait]
pub trait ConnectionFactory: Send + Sync {
    async fn open(&self) -> Result<DatabaseConnection, DbErr>;
}

pub struct PostgresConnectionFactory {
    options: ConnectOptions,
}

impl PostgresConnectionFactory {
    pub fn new(config: &DatabaseConfig) -> Self {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .acquire_timeout(config.acquire_timeout)
            .sqlx_logging(false);

        Self { options }
    }
}

#[async_trait]
impl ConnectionFactory for PostgresConnectionFactory {
    async fn open(&self) -> Result<DatabaseConnection, DbErr> {
        Database::connect(self.options.clone()).await
    }
}

type ConnectionCell = Arc<OnceCell<Arc<DatabaseConnection>>>;

/// Long-lived handle to the document store, cloned into every adapter.
///
/// The pool is opened lazily by the first `connect()`. Callers that arrive
/// while that open is in flight wait for the same attempt. A failed attempt
/// leaves the handle unconnected, so the next request retries.
#[derive(Clone)]
pub struct DocumentStore {
    factory: Arc<dyn ConnectionFactory>,
    cell: Arc<Mutex<ConnectionCell>>,
}

impl DocumentStore {
    pub fn new(factory: Arc<dyn ConnectionFactory>) -> Self {
        Self {
            factory,
            cell: Arc::new(Mutex::new(Arc::new(OnceCell::new()))),
        }
    }

    /// Handle that is already connected to `conn`; `close()` followed by
    /// `connect()` will fail since there is no factory behind it.
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        let store = Self::new(Arc::new(NoFactory));
        let cell = store.current_cell();
        let _ = cell.set(Arc::new(conn));
        store
    }

    fn current_cell(&self) -> ConnectionCell {
        Arc::clone(&*mutex_lock(&self.cell, SOURCE, "current_cell"))
    }

    pub async fn connect(&self) -> Result<Arc<DatabaseConnection>, StoreError> {
        let cell = self.current_cell();

        let conn = cell
            .get_or_try_init(|| async {
                info!("Opening document store connection");
                self.factory.open().await.map(Arc::new).map_err(|e| {
                    error!(error = %e, "Failed to open document store connection");
                    StoreError::ConnectionError(e.to_string())
                })
            })
            .await?;

        Ok(Arc::clone(conn))
    }

    pub fn is_connected(&self) -> bool {
        self.current_cell().initialized()
    }

    /// Drops the pool. Connections borrowed by in-flight requests are
    /// released when those requests finish.
    pub async fn close(&self) {
        let previous = {
            let mut guard = mutex_lock(&self.cell, SOURCE, "close");
            std::mem::replace(&mut *guard, Arc::new(OnceCell::new()))
        };

        let Some(conn) = previous.get().cloned() else {
            return;
        };
        drop(previous);

        match Arc::try_unwrap(conn) {
            Ok(conn) => {
                if let Err(e) = conn.close().await {
                    error!(error = %e, "Error while closing document store connection");
                } else {
                    info!("Document store connection closed");
                }
            }
            Err(_) => debug!("Document store connection still borrowed; released on last drop"),
        }
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        let db = self.connect().await?;
        db.execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
        .map(|_| ())
        .map_err(|e| StoreError::DatabaseError(e.to_string()))
    }
}

struct NoFactory;

#[async_trait]
impl ConnectionFactory for NoFactory {
    async fn open(&self) -> Result<DatabaseConnection, DbErr> {
        Err(DbErr::Custom("no connection factory configured".to_string()))
    }
}
