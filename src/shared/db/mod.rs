mod connector;
mod schema;

pub use connector::{ConnectionFactory, DocumentStore, PostgresConnectionFactory, StoreError};
pub use schema::apply_migrations;
