//! Application layer: authorization, validation and the services built on
//! top of the repository traits.

pub mod affinity;
pub mod authorization;
pub mod catalog;
pub mod identity;
pub mod ports;
pub mod services;
pub mod stats;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use affinity::AffinityService;
pub use authorization::{authorize, require_admin, require_identity, Decision, Identity, Operation};
pub use catalog::{CatalogService, VacationFields, VacationUpdate};
pub use identity::{IdentityService, RegisterUser};
pub use ports::PasswordHasher;
pub use services::Services;
pub use stats::{DestinationLikes, StatsService, StatsSummary, VacationCounts};
