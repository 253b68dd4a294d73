//! Session manager - maps opaque tokens to logged-in users

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info, warn};

use super::token::{new_token, Session};
use crate::application::authorization::Identity;
use crate::application::identity::IdentityService;
use crate::domain::{DomainError, DomainResult};

/// Holds active sessions and turns a token back into an [`Identity`].
pub struct SessionManager {
    /// Active sessions indexed by token
    sessions: DashMap<String, Session>,
    identity: Arc<IdentityService>,
}

impl SessionManager {
    pub fn new(identity: Arc<IdentityService>) -> Self {
        Self {
            sessions: DashMap::new(),
            identity,
        }
    }

    /// Authenticate and open a session.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<(String, Identity)> {
        let identity = self.verify(email, password).await?;

        let token = new_token();
        self.sessions
            .insert(token.clone(), Session::new(identity.user_id));
        info!(user_id = identity.user_id, "Session opened");
        Ok((token, identity))
    }

    /// Credential check for the statistics area. Non-admins are rejected
    /// and no session is opened either way.
    pub async fn admin_login(&self, email: &str, password: &str) -> DomainResult<Identity> {
        let identity = self.verify(email, password).await?;
        if !identity.is_admin {
            warn!(user_id = identity.user_id, "Admin login refused");
            return Err(DomainError::Forbidden("admin only".into()));
        }
        Ok(identity)
    }

    /// Identity behind a token, or `None` for an unknown token. A session
    /// whose user has since disappeared is dropped.
    pub async fn resolve(&self, token: &str) -> DomainResult<Option<Identity>> {
        let Some(user_id) = self.sessions.get(token).map(|s| s.user_id) else {
            return Ok(None);
        };

        match self.identity.resolve_identity(user_id).await? {
            Some(identity) => {
                if let Some(mut session) = self.sessions.get_mut(token) {
                    session.touch();
                }
                Ok(Some(identity))
            }
            None => {
                debug!(user_id, "Session user vanished, dropping session");
                self.sessions.remove(token);
                Ok(None)
            }
        }
    }

    /// Close a session. Returns whether it existed.
    pub fn logout(&self, token: &str) -> bool {
        match self.sessions.remove(token) {
            Some((_, session)) => {
                info!(user_id = session.user_id, "Session closed");
                true
            }
            None => false,
        }
    }

    pub async fn is_authenticated(&self, token: &str) -> bool {
        matches!(self.resolve(token).await, Ok(Some(_)))
    }

    /// Number of open sessions
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    async fn verify(&self, email: &str, password: &str) -> DomainResult<Identity> {
        let user = self.identity.authenticate(email, password).await?;
        self.identity
            .resolve_identity(user.id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", user.id))
    }
}

/// Thread-safe session manager
pub type SharedSessionManager = Arc<SessionManager>;

pub fn create_session_manager(identity: Arc<IdentityService>) -> SharedSessionManager {
    Arc::new(SessionManager::new(identity))
}
