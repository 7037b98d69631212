//! Load Profile Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::ProfileData;
use crate::domain::repository::ProfileRepository;
use crate::domain::services::ProfileSealer;
use crate::domain::value_objects::ProfileName;
use crate::error::{ProfileError, ProfileResult};

/// Load Profile Use Case
pub struct LoadProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
    sealer: Arc<ProfileSealer>,
}

impl<R> LoadProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>, sealer: Arc<ProfileSealer>) -> Self {
        Self { repo, sealer }
    }

    pub async fn execute(&self, user_id: UserId, raw_name: &str) -> ProfileResult<ProfileData> {
        let name = ProfileName::normalize(raw_name).ok_or(ProfileError::InvalidName)?;

        let blob = self
            .repo
            .find_blob(user_id, &name)
            .await?
            .ok_or(ProfileError::NotFound)?;

        self.sealer.open(&blob).inspect_err(|_| {
            tracing::warn!(user_id = %user_id, name = %name, "Profile blob rejected");
        })
    }
}
