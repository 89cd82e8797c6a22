//! Get-or-create directory over player profiles.

use super::errors::{DirectoryError, DirectoryResult};
use super::models::{User, UserId};
use crate::store::Store;
use serde::Deserialize;
use std::sync::Arc;

/// Partial profile update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub nickname: Option<String>,
    pub phone: Option<String>,
}

impl ProfileUpdate {
    fn is_empty(&self) -> bool {
        self.nickname.is_none() && self.phone.is_none()
    }
}

/// User directory
#[derive(Clone)]
pub struct UserDirectory {
    store: Arc<Store>,
}

impl UserDirectory {
    /// Create a new user directory
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Look up a profile, creating it on first contact.
    ///
    /// Idempotent for existing users: the stored record is returned
    /// unchanged and nothing is persisted.
    pub async fn get_or_create(
        &self,
        user_id: UserId,
        username: Option<&str>,
    ) -> DirectoryResult<User> {
        if let Some(user) = self.store.snapshot().await.user(user_id) {
            return Ok(user.clone());
        }
        self.store
            .mutate(|doc| Ok(doc.get_or_create_user(user_id, username).clone()))
            .await
    }

    /// Look up an existing profile.
    pub async fn get(&self, user_id: UserId) -> DirectoryResult<User> {
        self.store
            .snapshot()
            .await
            .user(user_id)
            .cloned()
            .ok_or(DirectoryError::NotFound(user_id))
    }

    /// Apply a partial profile update.
    ///
    /// Fails with [`DirectoryError::NotFound`] if the user does not
    /// exist; updating a profile never creates one.
    pub async fn update_profile(
        &self,
        user_id: UserId,
        update: ProfileUpdate,
    ) -> DirectoryResult<User> {
        if update.is_empty() {
            // Nothing to write; still surface NotFound for unknown users.
            return self.get(user_id).await;
        }
        self.store
            .mutate(|doc| {
                let user = doc
                    .user_mut(user_id)
                    .ok_or(DirectoryError::NotFound(user_id))?;
                if let Some(nickname) = update.nickname {
                    user.nickname = nickname;
                }
                if let Some(phone) = update.phone {
                    user.phone = phone;
                }
                Ok(user.clone())
            })
            .await
    }
}
