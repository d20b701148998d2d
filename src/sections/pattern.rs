//! Weak pattern section - penalizes known-weak fragments.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::denylist::find_weak_pattern;

const WEAK_PATTERN_PENALTY: i32 = -2;

/// Penalizes the password once if it contains any denylisted fragment.
///
/// # Returns
/// - `-2` with a reason on the first match
/// - `0` if no fragment is found
pub fn weak_pattern_section(password: &SecretString) -> SectionResult {
    match find_weak_pattern(password.expose_secret()) {
        Some(_) => SectionResult::flag(WEAK_PATTERN_PENALTY, "Contains common weak pattern"),
        None => SectionResult::pass(0),
    }
}
