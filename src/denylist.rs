//! Denylist of known-weak password fragments.
//!
//! The list is fixed and lives in process memory; matching is a
//! case-insensitive substring search.

/// Known-weak fragments, checked in this order.
pub const WEAK_PATTERNS: &[&str] = &["123", "abc", "qwer", "password", "admin", "welcome"];

/// Returns the first denylisted fragment found in `password`, if any.
///
/// Scanning stops at the first match, so a password containing several
/// fragments still reports only one.
pub fn find_weak_pattern(password: &str) -> Option<&'static str> {
    let lowered = password.to_lowercase();
    WEAK_PATTERNS
        .iter()
        .copied()
        .find(|pattern| lowered.contains(pattern))
}

/// Checks if a password contains any denylisted fragment.
pub fn is_denylisted(password: &str) -> bool {
    find_weak_pattern(password).is_some()
}
