//! Server-side session records keyed by an opaque token

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A logged-in user. The identity itself is never cached here; it is
/// re-resolved from the store on every lookup.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i32,
    /// Last successful resolve
    pub last_seen_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: i32) -> Self {
        Self {
            user_id,
            last_seen_at: Utc::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_seen_at = Utc::now();
    }
}

/// Fresh opaque session token.
pub fn new_token() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        assert_ne!(new_token(), new_token());
        assert_eq!(new_token().len(), 36);
    }

    #[test]
    fn touch_moves_last_seen() {
        let mut s = Session::new(7);
        let before = s.last_seen_at;
        s.touch();
        assert!(s.last_seen_at >= before);
        assert_eq!(s.user_id, 7);
    }
}
