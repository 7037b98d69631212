//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod delete_profile;
pub mod list_profiles;
pub mod load_profile;
pub mod save_profile;

pub use config::ProfileConfig;
pub use delete_profile::DeleteProfileUseCase;
pub use list_profiles::ListProfilesUseCase;
pub use load_profile::LoadProfileUseCase;
pub use save_profile::SaveProfileUseCase;
