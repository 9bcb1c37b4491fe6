//! Quiz identifier value object and the `<id>` argument validator

use super::error::IdError;
use serde::{Deserialize, Serialize};

/// Store-assigned quiz identifier (Value Object)
///
/// Ids are never range-checked here: a negative or huge id is still a
/// well-formed id, and the store decides whether a record exists for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizId(i64);

impl QuizId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for QuizId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for QuizId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Validate a raw `<id>` command argument.
///
/// The argument is read the way `parseInt(raw, 10)` reads it: leading
/// whitespace is skipped, an optional sign is accepted, and parsing stops at
/// the first non-digit, so `"12abc"` yields `12`. Values beyond the `i64`
/// range saturate.
///
/// # Errors
///
/// - [`IdError::MissingParameter`] if `raw` is `None`
/// - [`IdError::NotANumber`] if no leading digit could be read
pub fn validate_id(raw: Option<&str>) -> Result<QuizId, IdError> {
    let raw = raw.ok_or(IdError::MissingParameter)?;
    parse_leading_int(raw)
        .map(QuizId::new)
        .ok_or(IdError::NotANumber)
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }

    let magnitude = unsigned[..end].bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}
