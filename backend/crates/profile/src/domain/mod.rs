//! Domain Layer
//!
//! Contains entities, value objects, services, and repository traits.

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entities::{ProfileData, ProfileRecord};
pub use repository::ProfileRepository;
pub use services::ProfileSealer;
pub use value_objects::ProfileName;
