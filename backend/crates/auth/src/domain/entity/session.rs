//! Session Entities
//!
//! Sessions are not stored. A session exists only as a signed token whose
//! claims are described here.

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;
use crate::domain::value_object::user_id::UserId;

/// Identity of the caller, established from a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.user_name.to_string(),
        }
    }
}

/// Token claims (JWT registered names `iat`/`exp`, seconds since epoch)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user_id: UserId,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    /// Expired once `now` reaches `exp`
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        now_secs >= self.exp
    }

    pub fn identity(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: self.user_id,
            username: self.username.clone(),
        }
    }
}
