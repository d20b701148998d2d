//! Bulk generation with strength reports.

use secrecy::{ExposeSecret, SecretString};

use super::{COUNT_RANGE, Complexity, ParameterWarning, clamp, generate_mnemonic, generate_random};
use crate::evaluator::score;
use crate::types::StrengthReport;

/// Style used for every password in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BulkStyle {
    /// `High` complexity random passwords.
    #[default]
    Random,
    /// 4 words joined by `-` with a trailing number.
    Mnemonic,
}

/// A password paired with its evaluation.
#[derive(Debug)]
pub struct ScoredPassword {
    pub password: SecretString,
    pub strength: StrengthReport,
}

#[derive(Debug)]
pub struct GeneratedBatch {
    pub passwords: Vec<ScoredPassword>,
    pub warnings: Vec<ParameterWarning>,
}

/// Generates `count` passwords of one style and scores each of them.
///
/// `count` is clamped to 3-10; `length` only applies to
/// [`BulkStyle::Random`] and is clamped to 8-64.
pub fn bulk_generate(count: usize, length: usize, style: BulkStyle) -> GeneratedBatch {
    let (count, warning) = clamp("count", count, &COUNT_RANGE);
    let mut warnings: Vec<ParameterWarning> = warning.into_iter().collect();

    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        let generated = match style {
            BulkStyle::Random => generate_random(length, Complexity::High),
            BulkStyle::Mnemonic => generate_mnemonic(4, "-", true),
        };
        for warning in generated.warnings {
            if !warnings.contains(&warning) {
                warnings.push(warning);
            }
        }

        let strength = score(&generated.password);
        passwords.push(ScoredPassword {
            password: generated.password,
            strength,
        });
    }

    #[cfg(feature = "tracing")]
    tracing::info!("generated batch of {} {:?} passwords", passwords.len(), style);

    GeneratedBatch { passwords, warnings }
}

impl GeneratedBatch {
    /// The strongest password in the batch, if any.
    pub fn strongest(&self) -> Option<&ScoredPassword> {
        self.passwords.iter().max_by_key(|p| p.strength.score)
    }

    /// Number of distinct passwords in the batch.
    pub fn distinct(&self) -> usize {
        let unique: std::collections::HashSet<&str> = self
            .passwords
            .iter()
            .map(|p| p.password.expose_secret())
            .collect();
        unique.len()
    }
}
