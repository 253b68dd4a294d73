//! Session management: login tokens and identity hydration

pub mod manager;
pub mod token;

pub use manager::{create_session_manager, SessionManager, SharedSessionManager};
pub use token::Session;
