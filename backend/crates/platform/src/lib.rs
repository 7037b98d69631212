//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Authenticated encryption for data at rest (AES-256-GCM)
//! - Password hashing (Argon2id)
//! - Random bytes and base64url helpers
//! - Bearer token header parsing

pub mod bearer;
pub mod cipher;
pub mod crypto;
pub mod password;
