//! Identity command payloads

use serde::Deserialize;
use validator::Validate;

/// Registration form as received from the transport layer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub password: String,
}

impl RegisterUser {
    pub fn new(first_name: &str, last_name: &str, email: &str, password: &str) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }
}
