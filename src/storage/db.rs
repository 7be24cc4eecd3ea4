use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use std::time::Duration;

use super::StorageError;
use crate::config::StorageConfig;
use crate::entities::{flow, flow_tag, icon, tag};

// About a century
const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Local storage manager for flows
#[derive(Debug, Clone)]
pub struct LocalStorage {
    pub(crate) conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open the database described by `config` and create missing tables
    pub async fn new(config: &StorageConfig) -> anyhow::Result<Self> {
        let url = config.database_url()?;
        Ok(Self::connect(&url).await?)
    }

    /// Open a private in-memory database
    pub async fn in_memory() -> Result<Self, StorageError> {
        Self::connect("sqlite::memory:").await
    }

    /// Pool options for `url`.
    ///
    /// An in-memory database lives only as long as its connection, so the
    /// pool holds exactly one connection and never recycles it.
    pub(crate) fn connect_options(url: &str) -> ConnectOptions {
        let mut options = ConnectOptions::new(url.to_string());
        options.sqlx_logging(false);
        if url.contains(":memory:") {
            options
                .min_connections(1)
                .max_connections(1)
                .max_lifetime(MEMORY_CONNECTION_LIFETIME)
                .idle_timeout(MEMORY_CONNECTION_LIFETIME);
        }
        options
    }

    async fn connect(url: &str) -> Result<Self, StorageError> {
        let conn = Database::connect(Self::connect_options(url)).await?;
        let storage = LocalStorage { conn };
        storage.init_schema().await?;

        log::info!("Opened database {}", url);
        Ok(storage)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<(), StorageError> {
        // Referenced tables first
        self.create_table(icon::Entity).await?;
        self.create_table(tag::Entity).await?;
        self.create_table(flow::Entity).await?;
        self.create_table(flow_tag::Entity).await?;
        Ok(())
    }

    async fn create_table<E: EntityTrait>(&self, entity: E) -> Result<(), StorageError> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);
        let mut statement = schema.create_table_from_entity(entity);
        statement.if_not_exists();
        self.conn.execute(backend.build(&statement)).await?;
        Ok(())
    }

    /// Check if the database has any flows
    pub async fn has_data(&self) -> Result<bool, StorageError> {
        use sea_orm::PaginatorTrait;
        Ok(flow::Entity::find().count(&self.conn).await? > 0)
    }
}
