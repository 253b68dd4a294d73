//! Service wiring shared by every front end

use std::sync::Arc;

use super::affinity::AffinityService;
use super::catalog::CatalogService;
use super::identity::IdentityService;
use super::ports::PasswordHasher;
use super::stats::StatsService;
use crate::domain::RepositoryProvider;
use crate::session::{create_session_manager, SharedSessionManager};
use crate::shared::Clock;

/// Every application service over one repository provider.
#[derive(Clone)]
pub struct Services {
    pub identity: Arc<IdentityService>,
    pub sessions: SharedSessionManager,
    pub catalog: Arc<CatalogService>,
    pub affinity: Arc<AffinityService>,
    pub stats: Arc<StatsService>,
}

impl Services {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let identity = Arc::new(IdentityService::new(repos.clone(), hasher));
        Self {
            sessions: create_session_manager(identity.clone()),
            identity,
            catalog: Arc::new(CatalogService::new(repos.clone(), clock)),
            affinity: Arc::new(AffinityService::new(repos.clone())),
            stats: Arc::new(StatsService::new(repos)),
        }
    }
}
