//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user
    ///
    /// Fails with `AuthError::UserNameTaken` when the name already exists.
    /// Uniqueness is enforced by storage, not by a prior lookup.
    async fn create(&self, user: NewUser) -> AuthResult<User>;

    /// Find user by exact (trimmed) user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;
}
