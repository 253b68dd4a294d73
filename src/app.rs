//! Application runtime.
//!
//! [`App`] encapsulates startup: database connection, migrations, seeding
//! and service wiring. The CLI and any future front end share it.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{info, warn};

use crate::application::ports::PasswordHasher;
use crate::application::Services;
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::seed::{init_data, SeedReport};
use crate::infrastructure::{init_database, BcryptHasher, DatabaseConfig, SeaOrmRepositoryProvider};
use crate::shared::{AppError, InfraError, SystemClock};

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the application.
pub struct AppOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
    /// Seed roles, bootstrap admin and (per config) the demo catalog
    /// into an empty database (default: true).
    pub seed: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
            seed: true,
        }
    }
}

// ── App ────────────────────────────────────────────────────────────

/// Handle to a started application.
///
/// ```rust,no_run
/// use vacations::app::{App, AppOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let app = App::start(AppOptions::default()).await?;
///     let listing = app.services.catalog.list_vacations(None).await?;
///     println!("{} vacations", listing.len());
///     app.shutdown().await;
///     Ok(())
/// }
/// ```
pub struct App {
    /// Application services.
    pub services: Services,
    /// Repository provider for data access.
    pub repos: Arc<dyn RepositoryProvider>,
    /// The configuration the app was started with.
    pub config: AppConfig,
    /// Result of seeding, when it ran.
    pub seed_report: Option<SeedReport>,

    db: DatabaseConnection,
}

impl App {
    /// Start the application with the given options.
    ///
    /// This will:
    /// 1. Connect to the database
    /// 2. Run migrations (if enabled)
    /// 3. Seed an empty database (if enabled)
    /// 4. Wire the services
    pub async fn start(opts: AppOptions) -> Result<Self, AppError> {
        let app_cfg = opts.config;
        app_cfg.validate()?;

        info!("Starting vacations service...");

        // ── Database ───────────────────────────────────────────
        let db_config = DatabaseConfig {
            url: app_cfg.database.url.clone(),
        };
        let db = init_database(&db_config).await.map_err(InfraError::from)?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await.map_err(InfraError::from)?;
            info!("Migrations completed");
        }

        // ── Repositories & Services ────────────────────────────
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let hasher: Arc<dyn PasswordHasher> =
            Arc::new(BcryptHasher::new(app_cfg.security.bcrypt_cost));

        let seed_report = if opts.seed {
            Some(
                init_data(
                    repos.as_ref(),
                    hasher.as_ref(),
                    &app_cfg.admin,
                    app_cfg.seed.demo_catalog,
                )
                .await?,
            )
        } else {
            None
        };

        let services = Services::new(repos.clone(), hasher, Arc::new(SystemClock));
        info!("Services ready");

        Ok(Self {
            services,
            repos,
            config: app_cfg,
            seed_report,
            db,
        })
    }

    /// Close the database connection.
    pub async fn shutdown(self) {
        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }
    }
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`App::start`]).
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
