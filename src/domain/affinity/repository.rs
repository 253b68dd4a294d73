//! Affinity store interface

use std::collections::HashMap;

use async_trait::async_trait;

use super::model::Like;
use crate::domain::DomainResult;

#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn exists(&self, user_id: i32, vacation_id: i32) -> DomainResult<bool>;
    /// The store holds at most one row per pair; a second insert fails
    /// with `Conflict(AlreadyLiked)`.
    async fn create(&self, like: Like) -> DomainResult<()>;
    /// Returns the number of rows removed (0 or 1).
    async fn delete(&self, user_id: i32, vacation_id: i32) -> DomainResult<u64>;
    async fn delete_by_vacation(&self, vacation_id: i32) -> DomainResult<u64>;
    async fn count_all(&self) -> DomainResult<u64>;
    async fn count_for_vacation(&self, vacation_id: i32) -> DomainResult<u64>;
    /// Like count keyed by vacation id; vacations without likes are absent.
    async fn count_by_vacation(&self) -> DomainResult<HashMap<i32, u64>>;
    async fn vacation_ids_liked_by(&self, user_id: i32) -> DomainResult<Vec<i32>>;
}
