//! Password evaluation sections
//!
//! Each section scores one aspect of password strength and may add a
//! feedback line.

mod entropy;
mod length;
mod pattern;
mod repetition;
mod variety;

pub use entropy::entropy_section;
pub use length::length_section;
pub use pattern::weak_pattern_section;
pub use repetition::repetition_section;
pub use variety::character_variety_section;

/// Outcome of a single section.
/// - `points` - contribution to the score (may be negative)
/// - `feedback` - reason to show the user, if the section flagged something
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResult {
    pub points: i32,
    pub feedback: Option<String>,
}

impl SectionResult {
    pub(crate) fn pass(points: i32) -> Self {
        Self {
            points,
            feedback: None,
        }
    }

    pub(crate) fn flag(points: i32, feedback: impl Into<String>) -> Self {
        Self {
            points,
            feedback: Some(feedback.into()),
        }
    }
}

/// Signature shared by all sections.
pub type Section = fn(&secrecy::SecretString) -> SectionResult;
