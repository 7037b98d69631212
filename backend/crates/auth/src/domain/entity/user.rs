//! User Entity
//!
//! An account: identity, login handle and password hash.
//! Users are created on registration and never mutated afterwards.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// A user that has not been persisted yet (no id assigned)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(user_name: UserName, password_hash: UserPassword) -> Self {
        Self {
            user_name,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Attach the id assigned by storage
    pub fn into_user(self, user_id: UserId) -> User {
        User {
            user_id,
            user_name: self.user_name,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }
}

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Numeric id assigned by storage
    pub user_id: UserId,
    /// Trimmed login name (unique, case-sensitive)
    pub user_name: UserName,
    /// Argon2id hash
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
}
