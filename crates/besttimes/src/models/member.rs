use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A roster entry.
///
/// `member_id` identifies the team membership and keys the best-time
/// store; `user_id` identifies the account whose records are fetched.
/// The two are distinct upstream and must not be conflated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: Uuid,
    pub user_id: Uuid,
}

impl Member {
    pub fn new(member_id: Uuid, user_id: Uuid) -> Self {
        Self { member_id, user_id }
    }
}
