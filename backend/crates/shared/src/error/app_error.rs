//! Application Error
//!
//! [`AppError`] is the single shape every feature error is rendered through.

use std::borrow::Cow;
use std::fmt;

use super::kind::ErrorKind;

/// クライアントに返すエラー
///
/// 機能ごとのエラー型（`AuthError`、`ProfileError`）は内部の詳細をログに
/// 出した後、公開してよいメッセージだけを持つ `AppError` に変換される。
///
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::NotFound, "Not found");
/// assert_eq!(err.status_code(), 404);
/// ```
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::Conflict, String::from("Username taken"));
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Username taken");
    }

    #[test]
    fn test_display_includes_kind() {
        let err = AppError::new(ErrorKind::IntegrityFailure, "Decryption error");
        assert_eq!(err.to_string(), "[Integrity Failure] Decryption error");
    }
}
