//! Identity store interfaces

use async_trait::async_trait;

use super::model::{NewUser, Role, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Role>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Role>>;
    async fn find_all(&self) -> DomainResult<Vec<Role>>;
    /// Fails with `Conflict(DuplicateRole)` when the name is taken.
    async fn create(&self, name: &str) -> DomainResult<Role>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;
    /// `email` must already be normalized.
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    /// Fails with `Conflict(DuplicateEmail)` when the email is taken.
    async fn create(&self, user: NewUser) -> DomainResult<User>;
    async fn count(&self) -> DomainResult<u64>;
}
