//! Infrastructure layer - external concerns

pub mod crypto;
pub mod database;
pub mod seed;
pub mod storage;

pub use crypto::BcryptHasher;
pub use database::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
pub use seed::{init_data, SeedReport};
pub use storage::InMemoryStorage;
