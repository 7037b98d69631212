//! Repository Traits
//!
//! Interfaces for data persistence. Every operation is scoped to one user.

use kernel::id::UserId;

use crate::domain::entities::ProfileRecord;
use crate::domain::value_objects::ProfileName;
use crate::error::ProfileResult;

/// Profile repository trait
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Insert or replace the blob for (user, name) in a single statement
    async fn upsert(&self, record: &ProfileRecord) -> ProfileResult<()>;

    /// Encrypted blob for (user, name)
    async fn find_blob(&self, user_id: UserId, name: &ProfileName)
    -> ProfileResult<Option<String>>;

    /// Names owned by `user_id`, ascending
    async fn list_names(&self, user_id: UserId) -> ProfileResult<Vec<ProfileName>>;

    /// Returns `false` when nothing matched
    async fn delete(&self, user_id: UserId, name: &ProfileName) -> ProfileResult<bool>;
}
