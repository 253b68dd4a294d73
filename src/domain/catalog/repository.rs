//! Catalog store interfaces

use async_trait::async_trait;

use super::model::{Country, NewVacation, Vacation};
use crate::domain::DomainResult;

#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Country>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Country>>;
    /// Ordered by name.
    async fn find_all(&self) -> DomainResult<Vec<Country>>;
    /// Fails with `Conflict(DuplicateCountry)` when the name is taken.
    async fn create(&self, name: &str) -> DomainResult<Country>;
    /// Returns the number of rows removed.
    async fn delete(&self, id: i32) -> DomainResult<u64>;
}

#[async_trait]
pub trait VacationRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Vacation>>;
    /// Ordered by start date, then id.
    async fn find_all(&self) -> DomainResult<Vec<Vacation>>;
    async fn find_by_country(&self, country_id: i32) -> DomainResult<Vec<Vacation>>;
    async fn create(&self, vacation: NewVacation) -> DomainResult<Vacation>;
    /// Replaces every field of the stored row; `NotFound` when absent.
    async fn update(&self, vacation: Vacation) -> DomainResult<Vacation>;
    /// Returns the number of rows removed.
    async fn delete(&self, id: i32) -> DomainResult<u64>;
}
