//! Delete Profile Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::ProfileRepository;
use crate::domain::value_objects::ProfileName;
use crate::error::{ProfileError, ProfileResult};

/// Delete Profile Use Case
pub struct DeleteProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the normalized name that was deleted
    pub async fn execute(&self, user_id: UserId, raw_name: &str) -> ProfileResult<ProfileName> {
        let name = ProfileName::normalize(raw_name).ok_or(ProfileError::InvalidName)?;

        if !self.repo.delete(user_id, &name).await? {
            return Err(ProfileError::NotFound);
        }

        tracing::info!(user_id = %user_id, name = %name, "Deleted profile");

        Ok(name)
    }
}
