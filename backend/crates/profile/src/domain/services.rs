//! Domain Services
//!
//! Sealing and opening of profile payloads.

use platform::cipher::{CipherKey, PayloadCipher};

use crate::domain::entities::ProfileData;
use crate::error::{ProfileError, ProfileResult};

/// Encrypts [`ProfileData`] to a storable record and back
#[derive(Clone)]
pub struct ProfileSealer {
    cipher: PayloadCipher,
}

impl ProfileSealer {
    pub fn new(key: &CipherKey) -> Self {
        Self {
            cipher: PayloadCipher::new(key),
        }
    }

    /// Serialize and encrypt with a fresh IV
    pub fn seal(&self, data: &ProfileData) -> ProfileResult<String> {
        let plaintext =
            serde_json::to_vec(data).map_err(|e| ProfileError::Internal(e.to_string()))?;
        self.cipher
            .encrypt(&plaintext)
            .map_err(|e| ProfileError::Internal(e.to_string()))
    }

    /// Decrypt and parse
    ///
    /// A record that fails authentication, or decrypts to something that is
    /// not exactly `{money, level}`, is a [`ProfileError::DecryptionError`].
    pub fn open(&self, record: &str) -> ProfileResult<ProfileData> {
        let plaintext = self
            .cipher
            .decrypt(record)
            .map_err(|_| ProfileError::DecryptionError)?;
        serde_json::from_slice(&plaintext).map_err(|_| ProfileError::DecryptionError)
    }
}
