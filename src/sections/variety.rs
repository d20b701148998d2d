//! Character variety section - checks for uppercase, lowercase, numbers, symbols.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::charset::CharClasses;

const MIN_CLASSES: u8 = 3;

/// Awards one point per character class present.
///
/// # Returns
/// - `+0..=+4` depending on the classes present
/// - a reason if fewer than 3 classes are present
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let variety = CharClasses::of(password.expose_secret()).count();
    let points = i32::from(variety);

    if variety < MIN_CLASSES {
        return SectionResult::flag(points, "Add more character types");
    }
    SectionResult::pass(points)
}
