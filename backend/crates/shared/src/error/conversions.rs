//! Axum rendering for [`AppError`] (feature-gated)

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // The game client displays `error` as-is
        let body = serde_json::json!({
            "error": self.message(),
            "kind": self.kind(),
        });

        (status, Json(body)).into_response()
    }
}
