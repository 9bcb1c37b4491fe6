//! Answer comparison

/// Compare a typed answer with the stored one.
///
/// Both sides are trimmed and compared case-insensitively; there is no
/// partial credit.
pub fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}
