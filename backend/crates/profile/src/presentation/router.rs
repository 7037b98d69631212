//! Profile Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use auth::{CheckSessionUseCase, require_bearer_session};

use crate::application::config::ProfileConfig;
use crate::domain::repository::ProfileRepository;
use crate::domain::services::ProfileSealer;
use crate::infra::sqlite::SqliteProfileRepository;
use crate::presentation::handlers::{self, ProfileAppState};

/// Create the profile router with the SQLite repository
///
/// Every route requires a bearer session; unauthenticated requests are
/// answered with 401 before any handler or query runs.
pub fn profile_router(
    repo: SqliteProfileRepository,
    config: &ProfileConfig,
    check: CheckSessionUseCase,
) -> Router {
    profile_router_generic(repo, config, check)
}

/// Create a generic profile router for any repository implementation
pub fn profile_router_generic<R>(
    repo: R,
    config: &ProfileConfig,
    check: CheckSessionUseCase,
) -> Router
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let state = ProfileAppState {
        repo: Arc::new(repo),
        sealer: Arc::new(ProfileSealer::new(&config.cipher_key)),
    };

    Router::new()
        .route(
            "/player/{name}",
            post(handlers::save_profile::<R>)
                .get(handlers::load_profile::<R>)
                .delete(handlers::delete_profile::<R>),
        )
        .route("/players", get(handlers::list_profiles::<R>))
        .route_layer(from_fn_with_state(check, require_bearer_session))
        .with_state(state)
}
