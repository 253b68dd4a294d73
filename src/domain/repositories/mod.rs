//! Repository access for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::affinity::LikeRepository;
use super::catalog::{CountryRepository, VacationRepository};
use super::identity::{RoleRepository, UserRepository};
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let vacation = repos.vacations().find_by_id(3).await?;
///     let liked = repos.likes().exists(user_id, 3).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn roles(&self) -> &dyn RoleRepository;
    fn users(&self) -> &dyn UserRepository;
    fn countries(&self) -> &dyn CountryRepository;
    fn vacations(&self) -> &dyn VacationRepository;
    fn likes(&self) -> &dyn LikeRepository;
}
