use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Coarse error taxonomy handed to the transport layer.
///
/// The transport decides how each kind is presented (HTTP status,
/// re-prompting the login form, ...); the domain only classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Unauthenticated,
    Forbidden,
    NotFound,
    Conflict,
    Internal,
}

/// Business-rule violations on a proposed write. Always user-correctable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Price must be between 0 and 10,000 (got {0})")]
    OutOfRange(Decimal),

    #[error("Price must have at most two decimal places (got {0})")]
    InvalidPrecision(Decimal),

    #[error("End date {end} cannot be before start date {start}")]
    InvalidDateOrder { start: NaiveDate, end: NaiveDate },

    #[error("Start date {start} cannot be in the past (today is {today})")]
    PastDate { start: NaiveDate, today: NaiveDate },

    #[error("Password must be at least {min_length} characters")]
    WeakCredential { min_length: usize },

    #[error("Invalid {field}: {message}")]
    InvalidField { field: String, message: String },
}

/// Uniqueness violations, whether caught by a pre-check or by the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictError {
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    #[error("User {user_id} already liked vacation {vacation_id}")]
    AlreadyLiked { user_id: i32, vacation_id: i32 },

    #[error("Country already exists: {0}")]
    DuplicateCountry(String),

    #[error("Role already exists: {0}")]
    DuplicateRole(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(#[from] ValidationError),

    #[error("Already exists: {0}")]
    Conflict(#[from] ConflictError),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid email or password")]
    InvalidCredential,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("User {user_id} has not liked vacation {vacation_id}")]
    NotLiked { user_id: i32, vacation_id: i32 },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } | Self::NotLiked { .. } => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Unauthenticated | Self::InvalidCredential => ErrorKind::Unauthenticated,
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
