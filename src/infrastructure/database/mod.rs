pub mod entities;
pub mod migrator;
pub mod repositories;

pub use repositories::SeaOrmRepositoryProvider;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./vacations.db?mode=rwc";

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./vacations.db?mode=rwc")
    pub url: String,
}

impl DatabaseConfig {
    /// SQLite `:memory:` URL; each connection would get its own database
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);

    let mut opts = ConnectOptions::new(config.url.clone());
    opts.connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    // Every in-memory connection is its own database
    if config.is_in_memory() {
        opts.max_connections(1).min_connections(1);
    }

    let db = Database::connect(opts).await?;
    info!("Database connected successfully");
    Ok(db)
}
