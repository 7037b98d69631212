//! User Name Value Object
//!
//! The login handle of an account.
//!
//! ## Invariants
//! - Surrounding whitespace is trimmed before storage and lookup
//! - Not empty after trimming
//! - Otherwise stored and compared exactly (case-sensitive, no charset rules)

use std::fmt;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty after trimming
    Empty,
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "User name cannot be empty"),
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated, trimmed user name
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Trim and validate a raw user name
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
