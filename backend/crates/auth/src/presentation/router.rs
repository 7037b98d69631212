//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::SessionTokenService;
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::sqlite::SqliteAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the SQLite repository
pub fn auth_router(
    repo: SqliteAuthRepository,
    config: Arc<AuthConfig>,
    tokens: Arc<SessionTokenService>,
) -> Router {
    auth_router_generic(repo, config, tokens)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(
    repo: R,
    config: Arc<AuthConfig>,
    tokens: Arc<SessionTokenService>,
) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
        tokens,
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::sqlite::memory_pool;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn app() -> (Router, Arc<SessionTokenService>) {
        let config = Arc::new(AuthConfig::with_secret("router-test"));
        let tokens = Arc::new(SessionTokenService::new(&config));
        let repo = SqliteAuthRepository::new(memory_pool().await);
        (auth_router(repo, config, tokens.clone()), tokens)
    }

    async fn post_json(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let (app, tokens) = app().await;
        let creds = json!({"username": "bob", "password": "pw123"}).to_string();

        let (status, body) = post_json(&app, "/register", creds.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));

        let (status, body) = post_json(&app, "/login", creds).await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap();
        assert_eq!(tokens.verify(token).unwrap().username, "bob");
    }

    #[tokio::test]
    async fn test_duplicate_register_is_400() {
        let (app, _) = app().await;
        let creds = json!({"username": "bob", "password": "pw123"}).to_string();
        post_json(&app, "/register", creds.clone()).await;

        let (status, body) = post_json(&app, "/register", creds).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Username taken");
        assert_eq!(body["kind"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_missing_fields_and_bad_json_are_400() {
        let (app, _) = app().await;
        for body in [
            json!({"username": "bob"}).to_string(),
            json!({"password": "pw"}).to_string(),
            json!({"username": "  ", "password": "pw"}).to_string(),
            "not json".to_string(),
        ] {
            let (status, body) = post_json(&app, "/register", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Missing credentials");
        }
    }

    #[tokio::test]
    async fn test_bad_login_is_401() {
        let (app, _) = app().await;
        post_json(
            &app,
            "/register",
            json!({"username": "bob", "password": "pw123"}).to_string(),
        )
        .await;

        let (status, body) = post_json(
            &app,
            "/login",
            json!({"username": "bob", "password": "wrong"}).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid credentials");
    }
}
