//! Save Profile Use Case

use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::{ProfileData, ProfileRecord};
use crate::domain::repository::ProfileRepository;
use crate::domain::services::ProfileSealer;
use crate::domain::value_objects::ProfileName;
use crate::error::{ProfileError, ProfileResult};

/// Save Profile Use Case
///
/// Creates the profile on first save and overwrites it afterwards.
pub struct SaveProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
    sealer: Arc<ProfileSealer>,
}

impl<R> SaveProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>, sealer: Arc<ProfileSealer>) -> Self {
        Self { repo, sealer }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        raw_name: &str,
        body: &Value,
    ) -> ProfileResult<ProfileName> {
        let name = ProfileName::normalize(raw_name).ok_or(ProfileError::InvalidName)?;
        let data = ProfileData::from_untrusted(body);

        let record = ProfileRecord {
            user_id,
            name,
            encrypted_blob: self.sealer.seal(&data)?,
            updated_at: Utc::now(),
        };
        self.repo.upsert(&record).await?;

        tracing::info!(user_id = %user_id, name = %record.name, "Saved profile");

        Ok(record.name)
    }
}
