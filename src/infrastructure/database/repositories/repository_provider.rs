//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::affinity::LikeRepository;
use crate::domain::catalog::{CountryRepository, VacationRepository};
use crate::domain::identity::{RoleRepository, UserRepository};
use crate::domain::repositories::RepositoryProvider;

use super::country_repository::SeaOrmCountryRepository;
use super::like_repository::SeaOrmLikeRepository;
use super::role_repository::SeaOrmRoleRepository;
use super::user_repository::SeaOrmUserRepository;
use super::vacation_repository::SeaOrmVacationRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let vacation = repos.vacations().find_by_id(3).await?;
/// let likes = repos.likes().count_for_vacation(3).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    roles: SeaOrmRoleRepository,
    users: SeaOrmUserRepository,
    countries: SeaOrmCountryRepository,
    vacations: SeaOrmVacationRepository,
    likes: SeaOrmLikeRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            roles: SeaOrmRoleRepository::new(db.clone()),
            users: SeaOrmUserRepository::new(db.clone()),
            countries: SeaOrmCountryRepository::new(db.clone()),
            vacations: SeaOrmVacationRepository::new(db.clone()),
            likes: SeaOrmLikeRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn roles(&self) -> &dyn RoleRepository {
        &self.roles
    }

    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn countries(&self) -> &dyn CountryRepository {
        &self.countries
    }

    fn vacations(&self) -> &dyn VacationRepository {
        &self.vacations
    }

    fn likes(&self) -> &dyn LikeRepository {
        &self.likes
    }
}
