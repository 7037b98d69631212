//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    SessionTokenService, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{CredentialsRequest, LoginResponse, SuccessResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<SessionTokenService>,
}

/// Unusable bodies are treated the same as absent credentials
fn credentials(payload: Result<Json<CredentialsRequest>, JsonRejection>) -> AuthResult<(String, String)> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected credentials body");
        AuthError::MissingCredentials
    })?;
    Ok(req.into_parts())
}

// ============================================================================
// Register
// ============================================================================

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<Json<SuccessResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let (user_name, password) = credentials(payload)?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());
    use_case
        .execute(SignUpInput {
            user_name,
            password,
        })
        .await?;

    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let (user_name, password) = credentials(payload)?;

    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );
    let output = use_case
        .execute(SignInInput {
            user_name,
            password,
        })
        .await?;

    Ok(Json(LoginResponse {
        token: output.token,
    }))
}
