//! Identity module: registration, authentication and roles

pub mod commands;
pub mod service;

pub use commands::RegisterUser;
pub use service::IdentityService;
