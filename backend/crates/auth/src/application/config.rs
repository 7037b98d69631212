//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use platform::crypto::random_bytes;

/// Lifetime of an issued session token
pub const SESSION_TTL: Duration = Duration::from_secs(2 * 3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for signing session tokens
    pub session_secret: Vec<u8>,
    /// Token lifetime (2 hours)
    pub session_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::with_random_secret()
    }
}

impl AuthConfig {
    /// Config signing with the given secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            session_secret: secret.into(),
            session_ttl: SESSION_TTL,
            password_pepper: None,
        }
    }

    /// Create config with a random session secret (for development)
    ///
    /// Tokens issued under it stop verifying after a restart.
    pub fn with_random_secret() -> Self {
        Self::with_secret(random_bytes(32))
    }

    /// Token TTL in whole seconds
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("session_secret", &"[REDACTED]")
            .field("session_ttl", &self.session_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_two_hours() {
        let config = AuthConfig::with_secret("s3cret");
        assert_eq!(config.session_ttl_secs(), 7200);
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_random_secrets_differ() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_eq!(a.session_secret.len(), 32);
        assert_ne!(a.session_secret, b.session_secret);
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = AuthConfig::with_secret("topsecretvalue");
        assert!(!format!("{config:?}").contains("topsecretvalue"));
    }
}
