use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait, Schema};

use crate::constants::IN_MEMORY_DATABASE_URL;
use crate::entities::item;

/// Idle/lifetime limit for in-memory pools. An in-memory SQLite database only
/// lives as long as its connection, so the single pooled connection must never be reaped.
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Local storage manager for to-do items
#[derive(Clone, Debug)]
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open (or create) the database at `database_url` and make sure the schema exists.
    pub async fn new(database_url: &str) -> Result<Self> {
        let in_memory = is_in_memory_url(database_url);
        if !in_memory {
            ensure_parent_dir(database_url)?;
        }

        let mut options = ConnectOptions::new(database_url.to_string());
        options.sqlx_logging(false);
        if in_memory {
            options
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME)
                .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME);
        }

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to open database: {}", database_url))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        info!("Opened to-do store at {}", database_url);

        Ok(storage)
    }

    /// Private in-memory database, used by tests and `database.in_memory = true`.
    pub async fn in_memory() -> Result<Self> {
        Self::new(IN_MEMORY_DATABASE_URL).await
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut create_items = schema.create_table_from_entity(item::Entity);
        create_items.if_not_exists();

        self.conn
            .execute(backend.build(&create_items))
            .await
            .context("Failed to create todo_items table")?;
        debug!("Schema ready");

        Ok(())
    }

    /// Check if the database has any items
    pub async fn has_data(&self) -> Result<bool> {
        let count = item::Entity::find().count(&self.conn).await?;
        Ok(count > 0)
    }
}

fn is_in_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Create the directory holding a file-backed SQLite database.
fn ensure_parent_dir(database_url: &str) -> Result<()> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
        }
    }

    Ok(())
}
