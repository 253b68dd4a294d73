//! Like / unlike on behalf of the calling user.
//!
//! There is no way to name another user here: the acting identity is
//! always the owner of the like.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::authorization::{require_identity, Identity, Operation};
use crate::application::validation::{validate_like, LikeDirection};
use crate::domain::{DomainError, DomainResult, Like, RepositoryProvider};

pub struct AffinityService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AffinityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn like(&self, identity: Option<&Identity>, vacation_id: i32) -> DomainResult<()> {
        let identity = require_identity(identity, Operation::WriteOwn)?;
        let user_id = identity.user_id;

        let vacation_exists = self.repos.vacations().find_by_id(vacation_id).await?.is_some();
        let already_liked = vacation_exists && self.repos.likes().exists(user_id, vacation_id).await?;
        validate_like(user_id, vacation_id, LikeDirection::Like, vacation_exists, already_liked)?;

        // The pre-check can lose a race; the store's uniqueness constraint
        // then yields the same AlreadyLiked conflict.
        self.repos.likes().create(Like::new(user_id, vacation_id)).await?;

        info!(user_id, vacation_id, "Vacation liked");
        Ok(())
    }

    pub async fn unlike(&self, identity: Option<&Identity>, vacation_id: i32) -> DomainResult<()> {
        let identity = require_identity(identity, Operation::WriteOwn)?;
        let user_id = identity.user_id;

        let liked = self.repos.likes().exists(user_id, vacation_id).await?;
        validate_like(user_id, vacation_id, LikeDirection::Unlike, true, liked)?;

        if self.repos.likes().delete(user_id, vacation_id).await? == 0 {
            debug!(user_id, vacation_id, "Like vanished before delete");
            return Err(DomainError::NotLiked {
                user_id,
                vacation_id,
            });
        }

        info!(user_id, vacation_id, "Vacation unliked");
        Ok(())
    }

    /// Ids of the vacations the caller has liked.
    pub async fn my_likes(&self, identity: Option<&Identity>) -> DomainResult<Vec<i32>> {
        let identity = require_identity(identity, Operation::ReadOwn)?;
        let mut ids = self
            .repos
            .likes()
            .vacation_ids_liked_by(identity.user_id)
            .await?;
        ids.sort_unstable();
        Ok(ids)
    }
}
