//! Report types produced by the strength evaluator.

use serde::Serialize;
use std::fmt;

/// Qualitative rating derived from the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
}

impl Rating {
    /// Maps a raw score to a rating. The score is not clamped, so negative
    /// values are simply `Weak`.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 8 => Rating::VeryStrong,
            s if s >= 6 => Rating::Strong,
            s if s >= 4 => Rating::Moderate,
            _ => Rating::Weak,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rating::VeryStrong => "VERY STRONG",
            Rating::Strong => "STRONG",
            Rating::Moderate => "MODERATE",
            Rating::Weak => "WEAK",
        };
        f.write_str(label)
    }
}

/// Result of a strength evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub score: i32,
    pub rating: Rating,
    pub entropy_bits: u64,
    /// Feedback in evaluation order.
    pub feedback: Vec<String>,
    /// Length in characters.
    pub length: usize,
    /// Number of character classes present (0-4).
    pub variety: u8,
}
