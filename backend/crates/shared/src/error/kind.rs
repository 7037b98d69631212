//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// エラー種別
///
/// レスポンスボディの `kind` フィールドにそのまま出力される。
///
/// ## Notes
/// * `Conflict` はゲームクライアントとの互換のため 400
/// * `IntegrityFailure` は鍵の不一致・改ざんを表すため 500
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Conflict.status_code(), 400);
/// assert_eq!(ErrorKind::IntegrityFailure.to_string(), "Integrity Failure");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// 入力の欠落・形式不正
    BadRequest,
    /// トークンなし/不正/期限切れ、または認証情報の誤り
    Unauthorized,
    /// 該当するプロファイルがない
    NotFound,
    /// ユーザー名の重複
    Conflict,
    /// 保存済みデータの復号失敗
    IntegrityFailure,
    /// データベース・内部処理の失敗
    InternalServerError,
}

impl ErrorKind {
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest | ErrorKind::Conflict => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::IntegrityFailure | ErrorKind::InternalServerError => 500,
        }
    }

    const fn label(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::IntegrityFailure => "Integrity Failure",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
