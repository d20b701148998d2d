//! Repetition section - penalizes passwords built from few distinct characters.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashSet;
use super::SectionResult;

/// Penalizes the password if its length exceeds 1.5 times the number of
/// distinct characters.
pub fn repetition_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let len = pwd.chars().count();
    let distinct = pwd.chars().collect::<HashSet<char>>().len();

    // len > 1.5 * distinct, kept in integers
    if 2 * len > 3 * distinct {
        return SectionResult::flag(-1, "Too many repeated characters");
    }
    SectionResult::pass(0)
}
