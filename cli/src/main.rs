//! Vacations service: command line tools
//!
//! ```sh
//! # Validate the config (~/.config/vacations/config.toml by default)
//! vacations check
//!
//! # Create the schema and seed an empty database
//! vacations --config /etc/vacations/config.toml init-db
//!
//! # Dashboard numbers as JSON (admin credentials required)
//! vacations stats --email admin@example.com --password adminpass --as-of 2025-12-01
//!
//! # Public vacation listing as JSON
//! vacations vacations
//! ```

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

use vacations::config::AppConfig;
use vacations::shared::InfraError;
use vacations::{init_tracing, App, AppError, AppOptions};

/// Vacations booking catalog: admin and maintenance commands.
#[derive(Parser, Debug)]
#[command(
    name = "vacations",
    version,
    about = "Vacations catalog service tools",
    long_about = "Command line front end for the vacations service.\n\n\
                  Default config: ~/.config/vacations/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "VACATIONS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the database URL.
    #[arg(long)]
    database_url: Option<String>,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Do not seed an empty database.
    #[arg(long)]
    no_seed: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration file and exit.
    Check,
    /// Run migrations and seed initial data.
    InitDb,
    /// Print the admin statistics summary as JSON.
    Stats {
        #[arg(long)]
        email: String,
        #[arg(long, env = "VACATIONS_ADMIN_PASSWORD")]
        password: String,
        /// Reference date for past/ongoing/future (default: today).
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Print the vacation listing as JSON.
    Vacations,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let out = serde_json::to_string_pretty(value).map_err(InfraError::from)?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(vacations::resolve_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            if matches!(cli.command, Command::Check) {
                eprintln!("Configuration is invalid: {}", e);
                return Err(e.into());
            }
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config from {}: {}", config_path.display(), e);
            return Err(e.into());
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref url) = cli.database_url {
        config.database.url = url.clone();
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    // ── Config validation mode ─────────────────────────────────
    if let Command::Check = cli.command {
        config.validate()?;
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        println!("   Admin email : {}", config.admin.email);
        return Ok(());
    }

    let app = App::start(AppOptions {
        config,
        auto_migrate: !cli.no_migrate,
        seed: !cli.no_seed,
    })
    .await?;

    let result = run(&app, cli.command).await;
    app.shutdown().await;
    result.map_err(Into::into)
}

async fn run(app: &App, command: Command) -> Result<(), AppError> {
    match command {
        Command::Check => Ok(()),
        Command::InitDb => match app.seed_report {
            Some(report) => print_json(&report),
            None => {
                info!("Seeding disabled, schema only");
                Ok(())
            }
        },
        Command::Stats {
            email,
            password,
            as_of,
        } => {
            let admin = app.services.sessions.admin_login(&email, &password).await?;
            let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
            let summary = app.services.stats.summary(Some(&admin), as_of).await?;
            print_json(&summary)
        }
        Command::Vacations => {
            let listing = app.services.catalog.list_vacations(None).await?;
            print_json(&listing)
        }
    }
}
