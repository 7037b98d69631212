//! Session Token Issuing and Verification
//!
//! Stateless HS256 tokens in JWT compact form:
//! `base64url(header) "." base64url(claims) "." base64url(hmac)`.
//!
//! There is no session table. A token is valid iff its HMAC verifies under
//! the process secret and `exp` has not been reached. Changing the secret
//! invalidates every outstanding token at once.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

use platform::crypto::{from_base64url, to_base64url};

use crate::application::config::AuthConfig;
use crate::domain::entity::session::{AuthenticatedUser, SessionClaims};
use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_ALGORITHM: &str = "HS256";
const TOKEN_TYPE: &str = "JWT";

/// Why a token was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Bad structure, encoding, algorithm or signature
    #[error("Invalid token")]
    Invalid,

    /// Authentic but past `exp`
    #[error("Token expired")]
    Expired,
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid => AuthError::SessionInvalid,
            TokenError::Expired => AuthError::SessionExpired,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenHeader {
    alg: String,
    typ: String,
}

/// Issues and verifies session tokens under one secret
#[derive(Clone)]
pub struct SessionTokenService {
    secret: Vec<u8>,
    ttl_secs: i64,
}

impl SessionTokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.session_secret.clone(),
            ttl_secs: config.session_ttl_secs(),
        }
    }

    /// Issue a token for `user` valid from now for the configured TTL
    pub fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        self.issue_at(user, Utc::now())
    }

    pub fn issue_at(&self, user: &AuthenticatedUser, now: DateTime<Utc>) -> Result<String, AuthError> {
        let iat = now.timestamp();
        let claims = SessionClaims {
            user_id: user.user_id,
            username: user.username.clone(),
            iat,
            exp: iat + self.ttl_secs,
        };
        let header = TokenHeader {
            alg: TOKEN_ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        };

        let header_json =
            serde_json::to_vec(&header).map_err(|e| AuthError::Internal(e.to_string()))?;
        let claims_json =
            serde_json::to_vec(&claims).map_err(|e| AuthError::Internal(e.to_string()))?;

        let signing_input = format!("{}.{}", to_base64url(&header_json), to_base64url(&claims_json));
        let signature = self.mac(signing_input.as_bytes())?.finalize().into_bytes();

        Ok(format!("{}.{}", signing_input, to_base64url(&signature)))
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Signature first, then header and claims, then expiry
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, TokenError> {
        let mut parts = token.split('.');
        let (Some(header_b64), Some(claims_b64), Some(signature_b64), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::Invalid);
        };

        let signature = from_base64url(signature_b64).map_err(|_| TokenError::Invalid)?;
        let signing_input_len = header_b64.len() + 1 + claims_b64.len();
        let mac = self
            .mac(&token.as_bytes()[..signing_input_len])
            .map_err(|_| TokenError::Invalid)?;
        mac.verify_slice(&signature).map_err(|_| TokenError::Invalid)?;

        let header: TokenHeader = from_base64url(header_b64)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or(TokenError::Invalid)?;
        if header.alg != TOKEN_ALGORITHM {
            return Err(TokenError::Invalid);
        }

        let claims: SessionClaims = from_base64url(claims_b64)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .ok_or(TokenError::Invalid)?;

        if claims.is_expired_at(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    fn mac(&self, data: &[u8]) -> Result<HmacSha256, AuthError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AuthError::Internal(format!("Invalid session secret: {e}")))?;
        mac.update(data);
        Ok(mac)
    }
}
