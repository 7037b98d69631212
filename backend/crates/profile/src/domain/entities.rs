//! Domain Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use kernel::id::UserId;

use crate::domain::value_objects::ProfileName;

/// Game state stored in one profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileData {
    pub money: i64,
    pub level: i64,
}

impl ProfileData {
    pub const DEFAULT_MONEY: i64 = 0;
    pub const DEFAULT_LEVEL: i64 = 1;

    /// Build from an untrusted request body
    ///
    /// Each field is coerced on its own; anything that does not read as a
    /// finite number falls back to the default (money 0, level 1).
    pub fn from_untrusted(body: &Value) -> Self {
        Self {
            money: coerce_integer(body.get("money"), Self::DEFAULT_MONEY),
            level: coerce_integer(body.get("level"), Self::DEFAULT_LEVEL),
        }
    }
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            money: Self::DEFAULT_MONEY,
            level: Self::DEFAULT_LEVEL,
        }
    }
}

/// Integers pass through, finite floats truncate toward zero,
/// numeric strings are parsed, everything else is `default`
fn coerce_integer(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(truncate_finite))
            .unwrap_or(default),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate_finite))
                .unwrap_or(default)
        }
        _ => default,
    }
}

fn truncate_finite(f: f64) -> Option<i64> {
    // `as` saturates at the i64 bounds
    f.is_finite().then(|| f.trunc() as i64)
}

/// A profile as persisted: the payload is always ciphertext
#[derive(Debug, Clone)]
pub struct ProfileRecord {
    pub user_id: UserId,
    pub name: ProfileName,
    /// `hex(iv):hex(tag):hex(ciphertext)`
    pub encrypted_blob: String,
    pub updated_at: DateTime<Utc>,
}
