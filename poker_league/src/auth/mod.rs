//! Admin authorization policy.
//!
//! A fixed allow-list of user ids, injected into the managers that
//! gate admin operations. The trust model is deliberately weak: the
//! caller-supplied id is compared against the list, nothing more.
//! Whether a given user is an admin is always recomputed from this
//! policy; it is never persisted with the user record.

use crate::users::UserId;
use std::collections::HashSet;

/// Fixed set of user ids permitted to perform admin operations.
#[derive(Debug, Clone, Default)]
pub struct AdminPolicy {
    admins: HashSet<UserId>,
}

impl AdminPolicy {
    /// Build a policy from an allow-list of user ids.
    pub fn new(admins: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            admins: admins.into_iter().collect(),
        }
    }

    /// Whether `user_id` may perform admin operations.
    pub fn is_admin(&self, user_id: UserId) -> bool {
        self.admins.contains(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_ids_are_admins() {
        let policy = AdminPolicy::new([1, 2]);
        assert!(policy.is_admin(1));
        assert!(policy.is_admin(2));
        assert!(!policy.is_admin(3));
    }

    #[test]
    fn test_default_policy_rejects_everyone() {
        let policy = AdminPolicy::default();
        assert!(!policy.is_admin(1));
    }
}
