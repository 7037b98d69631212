//! List Profiles Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

/// List Profiles Use Case
pub struct ListProfilesUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> ListProfilesUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Sorted names, empty if the user has none
    pub async fn execute(&self, user_id: UserId) -> ProfileResult<Vec<String>> {
        let names = self.repo.list_names(user_id).await?;
        Ok(names.into_iter().map(|n| n.into_string()).collect())
    }
}
