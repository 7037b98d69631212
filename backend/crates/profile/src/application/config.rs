//! Application Configuration
//!
//! Configuration for the profile application layer.

use platform::cipher::CipherKey;

/// Profile application configuration
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    /// AES-256-GCM key for profile payloads
    pub cipher_key: CipherKey,
}

impl ProfileConfig {
    pub fn new(cipher_key: CipherKey) -> Self {
        Self { cipher_key }
    }

    /// Random key; profiles saved under it are unreadable after a restart
    pub fn development() -> Self {
        Self::new(CipherKey::generate())
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self::development()
    }
}
