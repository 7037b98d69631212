//! Bearer Token Extraction
//!
//! Parsing of the `Authorization: Bearer <token>` request header.

use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Authorization scheme accepted by the API
pub const BEARER_SCHEME: &str = "Bearer";

/// Reasons a request carries no usable bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BearerError {
    /// No `Authorization` header at all
    #[error("Missing token")]
    Missing,

    /// Header present but not `Bearer <token>`
    #[error("Invalid auth header")]
    Malformed,
}

/// Extract the bearer token from request headers
///
/// The header must be exactly two space-separated parts, the first being `Bearer`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(BearerError::Malformed),
    }
}
