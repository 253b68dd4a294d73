//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_roles;
mod m20250101_000002_create_users;
mod m20250101_000003_create_countries;
mod m20250101_000004_create_vacations;
mod m20250101_000005_create_likes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_roles::Migration),
            Box::new(m20250101_000002_create_users::Migration),
            Box::new(m20250101_000003_create_countries::Migration),
            Box::new(m20250101_000004_create_vacations::Migration),
            Box::new(m20250101_000005_create_likes::Migration),
        ]
    }
}
