use serde::Serialize;

/// One user's endorsement of one vacation. The pair is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Like {
    pub user_id: i32,
    pub vacation_id: i32,
}

impl Like {
    pub fn new(user_id: i32, vacation_id: i32) -> Self {
        Self {
            user_id,
            vacation_id,
        }
    }
}
