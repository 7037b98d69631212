//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration and login with username + password
//! - Stateless HS256 bearer tokens valid for two hours
//! - `require_bearer_session` middleware for protecting other routers
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Unknown usernames and wrong passwords are indistinguishable, in
//!   both response and timing
//! - Token signature is verified before any claim is trusted

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{CheckSessionUseCase, SessionTokenService, TokenError};
pub use domain::entity::session::AuthenticatedUser;
pub use error::{AuthError, AuthResult};
pub use infra::sqlite::SqliteAuthRepository;
pub use presentation::middleware::require_bearer_session;
pub use presentation::router::auth_router;
