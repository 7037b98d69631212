//! Profile (Game Save) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Name normalization, profile payloads, sealing, repository traits
//! - `application/` - Save / load / list / delete use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers and router
//!
//! ## Security Model
//! - Payloads are sealed with AES-256-GCM before they reach storage
//! - A blob that fails authentication is an error, never an empty profile
//! - Every query is scoped by the authenticated user's id
//! - Names are normalized once at the boundary so spellings cannot collide

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ProfileConfig;
pub use domain::value_objects::ProfileName;
pub use error::{ProfileError, ProfileResult};
pub use infra::sqlite::SqliteProfileRepository;
pub use presentation::router::profile_router;
