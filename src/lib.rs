//! # Vacations service
//!
//! Domain service layer for a vacation booking catalog: registration and
//! login, a destination/vacation catalog managed by admins, per-user likes
//! and an admin statistics dashboard.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core entities and repository traits
//! - **application**: Authorization gate, validation rules and services
//! - **infrastructure**: SeaORM persistence, in-memory store, bcrypt, seeding
//! - **session**: Login tokens and identity hydration
//! - **config**: TOML configuration
//! - **app**: Startup wiring shared by front ends

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod session;
pub mod shared;

pub use app::{init_tracing, App, AppOptions};
pub use config::{default_config_path, resolve_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, InMemoryStorage, SeaOrmRepositoryProvider};

pub use application::{Identity, Services};
pub use shared::{AppError, DomainError, ErrorKind};
