//! HTTP Handlers
//!
//! Every handler here runs behind `require_bearer_session`, which places the
//! caller's `AuthenticatedUser` in the request extensions.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde_json::Value;
use std::sync::Arc;

use auth::AuthenticatedUser;

use crate::application::{
    DeleteProfileUseCase, ListProfilesUseCase, LoadProfileUseCase, SaveProfileUseCase,
};
use crate::domain::entities::ProfileData;
use crate::domain::repository::ProfileRepository;
use crate::domain::services::ProfileSealer;
use crate::error::{ProfileError, ProfileResult};
use crate::presentation::dto::{DeletedResponse, SavedResponse};

/// Shared state for profile handlers
#[derive(Clone)]
pub struct ProfileAppState<R>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub sealer: Arc<ProfileSealer>,
}

/// A segment axum cannot decode is reported like any other bad name
fn profile_name(path: Result<Path<String>, PathRejection>) -> ProfileResult<String> {
    path.map(|Path(name)| name).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected profile path");
        ProfileError::InvalidName
    })
}

/// Only a body that is not declared as JSON falls back to the defaults
fn profile_body(body: Result<Json<Value>, JsonRejection>) -> ProfileResult<Value> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Null),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected profile body");
            Err(ProfileError::InvalidBody)
        }
    }
}

/// POST /player/{name}
pub async fn save_profile<R>(
    State(state): State<ProfileAppState<R>>,
    Extension(user): Extension<AuthenticatedUser>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ProfileResult<Json<SavedResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let raw_name = profile_name(path)?;
    let body = profile_body(body)?;

    let use_case = SaveProfileUseCase::new(state.repo.clone(), state.sealer.clone());
    use_case.execute(user.user_id, &raw_name, &body).await?;

    Ok(Json(SavedResponse { success: true }))
}

/// GET /player/{name}
pub async fn load_profile<R>(
    State(state): State<ProfileAppState<R>>,
    Extension(user): Extension<AuthenticatedUser>,
    path: Result<Path<String>, PathRejection>,
) -> ProfileResult<Json<ProfileData>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let raw_name = profile_name(path)?;

    let use_case = LoadProfileUseCase::new(state.repo.clone(), state.sealer.clone());
    let data = use_case.execute(user.user_id, &raw_name).await?;

    Ok(Json(data))
}

/// GET /players
pub async fn list_profiles<R>(
    State(state): State<ProfileAppState<R>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ProfileResult<Json<Vec<String>>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListProfilesUseCase::new(state.repo.clone());
    Ok(Json(use_case.execute(user.user_id).await?))
}

/// DELETE /player/{name}
pub async fn delete_profile<R>(
    State(state): State<ProfileAppState<R>>,
    Extension(user): Extension<AuthenticatedUser>,
    path: Result<Path<String>, PathRejection>,
) -> ProfileResult<Json<DeletedResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let raw_name = profile_name(path)?;

    let use_case = DeleteProfileUseCase::new(state.repo.clone());
    let name = use_case.execute(user.user_id, &raw_name).await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: name.into_string(),
    }))
}
