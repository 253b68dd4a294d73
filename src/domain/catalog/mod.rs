//! Catalog aggregate
//!
//! Countries (destinations) and the vacations offered in them.

pub mod model;
pub mod repository;

pub use model::{Country, NewVacation, Vacation, VacationListing, VacationPeriod, MAX_PRICE};
pub use repository::{CountryRepository, VacationRepository};
