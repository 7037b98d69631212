//! Router Composition
//!
//! Builds the full HTTP surface from a pool and configuration so that
//! `main` and the tests assemble the same application.

use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use serde::Serialize;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use auth::{CheckSessionUseCase, SessionTokenService, SqliteAuthRepository, auth_router};
use profile::{SqliteProfileRepository, profile_router};

use crate::config::AppConfig;

pub const SERVICE_NAME: &str = "server-saving";
pub const SERVICE_VERSION: &str = "secure-1.3";

#[derive(Debug, Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
    version: &'static str,
}

/// GET /
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
    })
}

/// Assemble the application router
pub fn build_app(pool: SqlitePool, config: &AppConfig) -> Router {
    let auth_config = Arc::new(config.auth.clone());
    let tokens = Arc::new(SessionTokenService::new(&auth_config));

    Router::new()
        .route("/", get(health))
        .nest(
            "/auth",
            auth_router(
                SqliteAuthRepository::new(pool.clone()),
                auth_config,
                tokens.clone(),
            ),
        )
        .merge(profile_router(
            SqliteProfileRepository::new(pool),
            &config.profile,
            CheckSessionUseCase::new(tokens),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.frontend_origins.as_deref()))
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let allow_origin = match origins {
        Some(origins) if !origins.iter().any(|origin| origin == "*") => AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        ),
        _ => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::ServiceExt;

    async fn app() -> Router {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("../../../database/migrations")
            .run(&pool)
            .await
            .unwrap();

        let key = "0f".repeat(32);
        let config = AppConfig::from_lookup(|name| match name {
            "ENCRYPTION_KEY" => Some(key.clone()),
            "JWT_SECRET" => Some("e2e-secret".to_string()),
            _ => None,
        });
        build_app(pool, &config)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(value) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"ok": true, "service": "server-saving", "version": "secure-1.3"})
        );
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let app = app().await;
        let creds = json!({"username": "bob", "password": "pw123"});

        let (status, body) =
            send(&app, Method::POST, "/auth/register", None, Some(creds.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));

        let (status, body) = send(&app, Method::POST, "/auth/login", None, Some(creds)).await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap().to_string();
        let token = Some(token.as_str());

        let (status, body) = send(
            &app,
            Method::POST,
            "/player/hero",
            token,
            Some(json!({"money": 100, "level": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));

        let (status, body) = send(&app, Method::GET, "/player/hero", token, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"money": 100, "level": 3}));

        let (status, body) = send(&app, Method::GET, "/players", token, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["hero"]));

        let (status, body) = send(&app, Method::DELETE, "/player/hero", token, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "deleted": "hero"}));

        let (status, body) = send(&app, Method::GET, "/player/hero", token, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found", "kind": "NOT_FOUND"}));
    }

    #[tokio::test]
    async fn test_profile_routes_reject_missing_token() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/players", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Missing token");

        let (status, body) = send(&app, Method::GET, "/players", Some("a.b.c"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid token");
    }

    #[tokio::test]
    async fn test_duplicate_registration_and_bad_login() {
        let app = app().await;
        let creds = json!({"username": "bob", "password": "pw123"});
        send(&app, Method::POST, "/auth/register", None, Some(creds.clone())).await;

        let (status, body) = send(&app, Method::POST, "/auth/register", None, Some(creds)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Username taken");

        let (status, body) = send(
            &app,
            Method::POST,
            "/auth/login",
            None,
            Some(json!({"username": "bob", "password": "nope"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let app = app().await;
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/players")
                    .header(header::ORIGIN, "http://game.test")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}
