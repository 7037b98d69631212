//! Auth Middleware
//!
//! Middleware for requiring a bearer session on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::application::CheckSessionUseCase;
use crate::error::AuthError;

/// Middleware that requires a valid bearer token
///
/// On success the caller's `AuthenticatedUser` is stored in the request
/// extensions, where handlers pick it up with `Extension<AuthenticatedUser>`.
/// On failure the request never reaches the inner service.
pub async fn require_bearer_session(
    State(check): State<CheckSessionUseCase>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let user = check.execute(req.headers())?;

    tracing::debug!(user_id = %user.user_id, "Bearer session accepted");
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
