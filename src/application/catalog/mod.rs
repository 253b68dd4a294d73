//! Catalog module: vacations and destinations

pub mod commands;
pub mod service;

pub use commands::{VacationFields, VacationUpdate};
pub use service::CatalogService;
