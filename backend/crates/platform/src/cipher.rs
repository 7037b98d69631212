//! Authenticated Encryption for Data at Rest
//!
//! AES-256-GCM with a fresh 128-bit IV per message.
//!
//! ## Record format
//! `hex(iv) ":" hex(tag) ":" hex(ciphertext)`
//!
//! The colon never appears in a hex alphabet, so each field is recoverable
//! independently. The IV is 16 bytes rather than the usual 12 so that records
//! already present in deployed save databases stay readable.
//!
//! ## Security
//! - Decryption verifies the tag before any plaintext is returned
//! - Keys are zeroized on drop and redacted from `Debug`

use std::fmt;

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Key, Nonce, Tag};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::random_bytes;

/// Key length in bytes (256 bits)
pub const KEY_LENGTH: usize = 32;

/// IV length in bytes (128 bits)
pub const IV_LENGTH: usize = 16;

/// GCM authentication tag length in bytes
pub const TAG_LENGTH: usize = 16;

/// Field delimiter inside an encrypted record
const RECORD_DELIMITER: char = ':';

/// AES-256-GCM with a 16-byte nonce
type Aes256Gcm16 = AesGcm<Aes256, U16>;

// ============================================================================
// Error Types
// ============================================================================

/// Key parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherKeyError {
    /// Not valid hexadecimal
    #[error("Encryption key is not valid hex")]
    InvalidHex,

    /// Decoded to the wrong number of bytes
    #[error("Encryption key must be {expected} bytes (got {actual})")]
    InvalidLength { expected: usize, actual: usize },
}

/// Encryption/decryption errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Authentication failed or the record is malformed
    #[error("Ciphertext failed authentication or is corrupted")]
    TamperOrCorruption,

    /// The AEAD refused to encrypt (message too long)
    #[error("Encryption failed")]
    EncryptionFailed,
}

// ============================================================================
// Cipher Key
// ============================================================================

/// 256-bit symmetric key, zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(test, derive(PartialEq))]
pub struct CipherKey([u8; KEY_LENGTH]);

impl CipherKey {
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-character hex string
    pub fn from_hex(hex_key: &str) -> Result<Self, CipherKeyError> {
        let mut decoded = hex::decode(hex_key.trim()).map_err(|_| CipherKeyError::InvalidHex)?;

        if decoded.len() != KEY_LENGTH {
            let actual = decoded.len();
            decoded.zeroize();
            return Err(CipherKeyError::InvalidLength {
                expected: KEY_LENGTH,
                actual,
            });
        }

        let mut key = [0u8; KEY_LENGTH];
        key.copy_from_slice(&decoded);
        decoded.zeroize();
        Ok(Self(key))
    }

    /// Generate a random key from the OS RNG
    pub fn generate() -> Self {
        let mut bytes = random_bytes(KEY_LENGTH);
        let mut key = [0u8; KEY_LENGTH];
        key.copy_from_slice(&bytes);
        bytes.zeroize();
        Self(key)
    }

    /// Hex form, suitable for an `ENCRYPTION_KEY=` line
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CipherKey").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Payload Cipher
// ============================================================================

/// Encrypts opaque payloads into self-describing text records
#[derive(Clone)]
pub struct PayloadCipher {
    aead: Aes256Gcm16,
}

impl PayloadCipher {
    pub fn new(key: &CipherKey) -> Self {
        let aead = Aes256Gcm16::new(Key::<Aes256Gcm16>::from_slice(&key.0));
        Self { aead }
    }

    /// Encrypt `plaintext` under a fresh random IV
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String, CipherError> {
        let iv = random_bytes(IV_LENGTH);
        let mut buffer = plaintext.to_vec();

        let tag = self
            .aead
            .encrypt_in_place_detached(Nonce::<U16>::from_slice(&iv), b"", &mut buffer)
            .map_err(|_| CipherError::EncryptionFailed)?;

        Ok(format!(
            "{}{delim}{}{delim}{}",
            hex::encode(&iv),
            hex::encode(tag),
            hex::encode(&buffer),
            delim = RECORD_DELIMITER,
        ))
    }

    /// Decrypt a record produced by [`PayloadCipher::encrypt`]
    ///
    /// Every failure (field count, hex, lengths, tag) collapses into
    /// [`CipherError::TamperOrCorruption`].
    pub fn decrypt(&self, record: &str) -> Result<Vec<u8>, CipherError> {
        let fields: Vec<&str> = record.split(RECORD_DELIMITER).collect();
        let [iv_hex, tag_hex, data_hex] = fields.as_slice() else {
            return Err(CipherError::TamperOrCorruption);
        };

        let iv = hex::decode(iv_hex).map_err(|_| CipherError::TamperOrCorruption)?;
        let tag = hex::decode(tag_hex).map_err(|_| CipherError::TamperOrCorruption)?;
        let mut buffer = hex::decode(data_hex).map_err(|_| CipherError::TamperOrCorruption)?;

        if iv.len() != IV_LENGTH || tag.len() != TAG_LENGTH {
            return Err(CipherError::TamperOrCorruption);
        }

        self.aead
            .decrypt_in_place_detached(
                Nonce::<U16>::from_slice(&iv),
                b"",
                &mut buffer,
                Tag::<U16>::from_slice(&tag),
            )
            .map_err(|_| CipherError::TamperOrCorruption)?;

        Ok(buffer)
    }
}

impl fmt::Debug for PayloadCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadCipher")
            .field("algorithm", &"AES-256-GCM")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cipher() -> PayloadCipher {
        PayloadCipher::new(&CipherKey::from_bytes([7u8; KEY_LENGTH]))
    }

    /// Flip one hex digit of the field at `index`
    fn flip_field(record: &str, index: usize) -> String {
        let mut fields: Vec<String> = record.split(':').map(str::to_string).collect();
        let field = &mut fields[index];
        let first = field.remove(0);
        field.insert(0, if first == '0' { '1' } else { '0' });
        fields.join(":")
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let cipher = test_cipher();
        let record = cipher.encrypt(br#"{"money":100,"level":3}"#).unwrap();
        assert_eq!(
            cipher.decrypt(&record).unwrap(),
            br#"{"money":100,"level":3}"#
        );
    }

    #[test]
    fn test_record_layout() {
        let record = test_cipher().encrypt(b"hello").unwrap();
        let fields: Vec<&str> = record.split(':').collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].len(), IV_LENGTH * 2);
        assert_eq!(fields[1].len(), TAG_LENGTH * 2);
        assert_eq!(fields[2].len(), b"hello".len() * 2);
        assert!(!record.contains("hello"));
    }

    #[test]
    fn test_fresh_iv_per_call() {
        let cipher = test_cipher();
        let a = cipher.encrypt(b"same").unwrap();
        let b = cipher.encrypt(b"same").unwrap();
        assert_ne!(a, b);
        assert_ne!(a.split(':').next(), b.split(':').next());
    }

    #[test]
    fn test_tampered_fields_are_rejected() {
        let cipher = test_cipher();
        let record = cipher.encrypt(b"payload").unwrap();
        for index in 0..3 {
            assert_eq!(
                cipher.decrypt(&flip_field(&record, index)),
                Err(CipherError::TamperOrCorruption),
                "field {index}"
            );
        }
    }

    #[test]
    fn test_malformed_records_are_rejected() {
        let cipher = test_cipher();
        let record = cipher.encrypt(b"payload").unwrap();
        let (iv, rest) = record.split_once(':').unwrap();

        for bad in [
            "".to_string(),
            "abc".to_string(),
            rest.to_string(),
            format!("{record}:00"),
            format!("zz{}:{rest}", &iv[2..]),
            format!("{}:{rest}", &iv[2..]),
        ] {
            assert_eq!(cipher.decrypt(&bad), Err(CipherError::TamperOrCorruption));
        }
    }

    #[test]
    fn test_wrong_key_is_rejected() {
        let record = test_cipher().encrypt(b"payload").unwrap();
        let other = PayloadCipher::new(&CipherKey::from_bytes([8u8; KEY_LENGTH]));
        assert_eq!(other.decrypt(&record), Err(CipherError::TamperOrCorruption));
    }

    #[test]
    fn test_key_from_hex() {
        let hex_key = "00".repeat(KEY_LENGTH);
        assert!(CipherKey::from_hex(&hex_key).is_ok());

        let generated = CipherKey::generate();
        let restored = CipherKey::from_hex(&generated.to_hex()).unwrap();
        assert_eq!(restored.to_hex(), generated.to_hex());
    }

    #[test]
    fn test_key_from_bad_hex() {
        assert_eq!(
            CipherKey::from_hex("not hex at all"),
            Err(CipherKeyError::InvalidHex)
        );
        assert_eq!(
            CipherKey::from_hex("abcd"),
            Err(CipherKeyError::InvalidLength {
                expected: 32,
                actual: 2
            })
        );
    }

    #[test]
    fn test_key_debug_redaction() {
        let key = CipherKey::from_bytes([0xab; KEY_LENGTH]);
        let debug = format!("{key:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("ab"));
    }
}
