//! Length section - rewards longer passwords.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;

/// Scores the password length.
///
/// # Returns
/// - `+3` for 12 characters or more
/// - `+2` for 8 to 11 characters
/// - `0` with a reason if the password is too short
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = password.expose_secret().chars().count();
    if len >= LONG_LENGTH {
        SectionResult::pass(3)
    } else if len >= MIN_LENGTH {
        SectionResult::pass(2)
    } else {
        SectionResult::flag(
            0,
            format!("Password too short (min {} characters)", MIN_LENGTH),
        )
    }
}
