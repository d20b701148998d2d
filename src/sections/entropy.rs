//! Entropy section - rewards a large estimated search space.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::evaluator::entropy_bits;

const HIGH_ENTROPY: u64 = 80;
const MEDIUM_ENTROPY: u64 = 50;

/// Scores the entropy estimate.
///
/// # Returns
/// - `+2` above 80 bits
/// - `+1` above 50 bits
/// - `0` with a reason otherwise
pub fn entropy_section(password: &SecretString) -> SectionResult {
    let bits = entropy_bits(password.expose_secret());
    if bits > HIGH_ENTROPY {
        SectionResult::pass(2)
    } else if bits > MEDIUM_ENTROPY {
        SectionResult::pass(1)
    } else {
        SectionResult::flag(0, "Low entropy - consider more randomness")
    }
}
