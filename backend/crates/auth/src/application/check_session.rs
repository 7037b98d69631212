//! Check Session Use Case
//!
//! Resolves the caller's identity from an `Authorization: Bearer` header.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::bearer::extract_bearer_token;

use crate::application::session_token::SessionTokenService;
use crate::domain::entity::session::AuthenticatedUser;
use crate::error::AuthResult;

/// Check session use case
#[derive(Clone)]
pub struct CheckSessionUseCase {
    tokens: Arc<SessionTokenService>,
}

impl CheckSessionUseCase {
    pub fn new(tokens: Arc<SessionTokenService>) -> Self {
        Self { tokens }
    }

    /// Authenticate a request by its headers
    pub fn execute(&self, headers: &HeaderMap) -> AuthResult<AuthenticatedUser> {
        let token = extract_bearer_token(headers)?;
        self.verify_token(token)
    }

    /// Verify a raw token string
    pub fn verify_token(&self, token: &str) -> AuthResult<AuthenticatedUser> {
        let claims = self.tokens.verify(token)?;
        Ok(claims.identity())
    }
}
