//! Infrastructure Layer

pub mod sqlite;

pub use sqlite::SqliteProfileRepository;
