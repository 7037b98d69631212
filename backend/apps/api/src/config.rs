//! Server Configuration
//!
//! Everything read from the environment (after `.env` is loaded) lives here.
//! Secrets that are missing or malformed are replaced by random values with
//! a loud warning; the server still starts.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use auth::AuthConfig;
use platform::cipher::CipherKey;
use profile::ProfileConfig;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://playerdata.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 3000;

/// Process configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// `None` allows any origin
    pub frontend_origins: Option<Vec<String>>,
    pub auth: AuthConfig,
    pub profile: ProfileConfig,
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match var("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, default = DEFAULT_PORT, "Invalid PORT, using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let ip = match var("BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid BIND_ADDR, binding all interfaces");
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            }),
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let frontend_origins = var("FRONTEND_ORIGINS").map(|raw| {
            raw.split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect()
        });

        Self {
            database_url,
            bind_addr: SocketAddr::new(ip, port),
            frontend_origins,
            auth: auth_config(var("JWT_SECRET"), var("PASSWORD_PEPPER")),
            profile: ProfileConfig::new(cipher_key(var("ENCRYPTION_KEY"))),
        }
    }
}

fn cipher_key(raw: Option<String>) -> CipherKey {
    match raw.as_deref().map(CipherKey::from_hex) {
        Some(Ok(key)) => key,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "ENCRYPTION_KEY is invalid");
            ephemeral_cipher_key()
        }
        None => {
            tracing::warn!("ENCRYPTION_KEY is not set");
            ephemeral_cipher_key()
        }
    }
}

fn ephemeral_cipher_key() -> CipherKey {
    let key = CipherKey::generate();
    tracing::warn!(
        key = %key.to_hex(),
        "Using a random encryption key. Put this key in ENCRYPTION_KEY before restarting, \
         or profiles saved during this run become unreadable"
    );
    key
}

fn auth_config(secret: Option<String>, pepper: Option<String>) -> AuthConfig {
    let mut config = match secret {
        Some(secret) => AuthConfig::with_secret(secret),
        None => {
            tracing::warn!(
                "JWT_SECRET is not set. Using a random secret; issued tokens stop working after restart"
            );
            AuthConfig::with_random_secret()
        }
    };
    config.password_pepper = pepper.map(String::into_bytes);
    config
}
