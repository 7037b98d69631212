//! Domain Value Objects
//!
//! Immutable value types for the profile domain.

use std::borrow::Cow;
use std::fmt;

/// Normalized profile name
///
/// The storage key of a profile within one user's namespace. Every read and
/// write path builds it through [`ProfileName::normalize`], so
/// `"Alice Smith"`, `"alice+smith"` and `"ALICE SMITH "` all address the
/// same row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfileName(String);

impl ProfileName {
    pub const MAX_LEN: usize = 32;

    /// Canonicalize a raw name, `None` if it is not acceptable
    ///
    /// `+` becomes a space, then the string is percent-decoded (kept as-is
    /// when it is not valid percent-encoding), trimmed and lowercased.
    pub fn normalize(raw: &str) -> Option<Self> {
        let spaced = raw.replace('+', " ");
        let decoded = match urlencoding::decode(&spaced) {
            Ok(decoded) => decoded,
            Err(_) => Cow::Borrowed(spaced.as_str()),
        };
        let name = decoded.trim().to_lowercase();

        let len = name.chars().count();
        if len == 0 || len > Self::MAX_LEN {
            return None;
        }
        if !name.chars().all(Self::is_allowed) {
            return None;
        }
        Some(Self(name))
    }

    /// Wrap a name read back from storage (already normalized on write)
    pub(crate) fn from_stored(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    fn is_allowed(c: char) -> bool {
        matches!(c, 'a'..='z' | '0'..='9' | ' ' | '_' | '-')
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProfileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: &str) -> Option<String> {
        ProfileName::normalize(raw).map(ProfileName::into_string)
    }

    #[test]
    fn test_equivalent_spellings_collapse() {
        let expected = Some("alice smith".to_string());
        assert_eq!(norm("Alice+Smith"), expected);
        assert_eq!(norm("alice smith"), expected);
        assert_eq!(norm(" ALICE SMITH "), expected);
        assert_eq!(norm("Alice%20Smith"), expected);
        // An encoded plus is a literal plus, which is not allowed
        assert_eq!(norm("alice%2Bsmith"), None);
    }

    #[test]
    fn test_allowed_characters() {
        assert_eq!(norm("hero_2-b"), Some("hero_2-b".to_string()));
        assert_eq!(norm("HERO"), Some("hero".to_string()));
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(norm(""), None);
        assert_eq!(norm("   "), None);
        assert_eq!(norm("+++"), None);
    }

    #[test]
    fn test_length_limit() {
        let max = "a".repeat(32);
        assert_eq!(norm(&max), Some(max.clone()));
        assert_eq!(norm(&"a".repeat(33)), None);
        // Trimmed before measuring
        assert_eq!(norm(&format!("  {max}  ")), Some(max));
    }

    #[test]
    fn test_rejects_disallowed_characters() {
        assert_eq!(norm("bad/char!"), None);
        assert_eq!(norm("dot.name"), None);
        assert_eq!(norm("caf\u{e9}"), None);
        assert_eq!(norm("tab\tname"), None);
        assert_eq!(norm("..%2F..%2Fetc"), None);
    }

    #[test]
    fn test_invalid_percent_encoding_is_kept_literally() {
        // "%" survives decoding and is then rejected by the charset rule
        assert_eq!(norm("100%"), None);
        assert_eq!(norm("%zz"), None);
        // Decodes to bytes that are not UTF-8, kept as typed, then rejected
        assert_eq!(norm("%ff"), None);
    }
}
