pub mod affinity;
pub mod catalog;
pub mod identity;
pub mod repositories;

// Re-export commonly used types
pub use affinity::{Like, LikeRepository};
pub use catalog::{
    Country, CountryRepository, NewVacation, Vacation, VacationListing, VacationPeriod,
    VacationRepository, MAX_PRICE,
};
pub use identity::{NewUser, Role, RoleRepository, User, UserRepository};
pub use repositories::{DomainResult, RepositoryProvider};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
