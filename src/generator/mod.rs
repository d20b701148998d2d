//! Password generation strategies.
//!
//! Every strategy clamps out-of-range parameters to the nearest bound and
//! reports what it changed through [`ParameterWarning`]s instead of
//! failing. [`GenerationRequest::validate`] is the strict alternative.

mod bulk;
mod mnemonic;
mod personal;
mod random;

pub use bulk::{BulkStyle, GeneratedBatch, ScoredPassword, bulk_generate};
pub use mnemonic::{WORD_BANK, generate_mnemonic};
pub use personal::{Pattern, PersonalField, PersonalInfo, generate_from_personal_info};
pub use random::{Complexity, generate_random, stronger_alternative};

use secrecy::SecretString;
use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Valid password length for random generation.
pub const LENGTH_RANGE: RangeInclusive<usize> = 8..=64;
/// Valid word count for mnemonic generation.
pub const WORD_COUNT_RANGE: RangeInclusive<usize> = 3..=6;
/// Valid batch size for bulk generation.
pub const COUNT_RANGE: RangeInclusive<usize> = 3..=10;

/// A parameter that was moved into its valid range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterWarning {
    pub parameter: &'static str,
    pub requested: usize,
    pub applied: usize,
}

impl fmt::Display for ParameterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is out of range, using {}",
            self.parameter, self.requested, self.applied
        )
    }
}

/// A freshly generated password and any clamping that was applied.
#[derive(Debug)]
pub struct GeneratedPassword {
    pub password: SecretString,
    pub warnings: Vec<ParameterWarning>,
}

impl GeneratedPassword {
    pub(crate) fn new(password: String, warnings: Vec<ParameterWarning>) -> Self {
        Self {
            password: SecretString::new(password.into()),
            warnings,
        }
    }
}

/// Clamps `value` into `range`, returning a warning if it had to move.
pub(crate) fn clamp(
    parameter: &'static str,
    value: usize,
    range: &RangeInclusive<usize>,
) -> (usize, Option<ParameterWarning>) {
    let applied = value.clamp(*range.start(), *range.end());
    if applied == value {
        return (value, None);
    }

    #[cfg(feature = "tracing")]
    tracing::warn!("{} {} out of range, clamped to {}", parameter, value, applied);

    let warning = ParameterWarning {
        parameter,
        requested: value,
        applied,
    };
    (applied, Some(warning))
}

fn check(parameter: &'static str, value: usize, range: &RangeInclusive<usize>) -> Result<()> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(Error::InvalidParameter {
        parameter,
        value,
        min: *range.start(),
        max: *range.end(),
    })
}

/// Strategy selection, resolved once at the call boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Random {
        length: usize,
        complexity: Complexity,
    },
    Mnemonic {
        word_count: usize,
        separator: String,
        append_number: bool,
    },
    PersonalInfo {
        info: PersonalInfo,
        pattern: Pattern,
    },
}

impl Default for GenerationRequest {
    fn default() -> Self {
        GenerationRequest::Random {
            length: 16,
            complexity: Complexity::High,
        }
    }
}

impl GenerationRequest {
    /// Mnemonic request with the default shape: 4 words, `-`, trailing number.
    pub fn mnemonic() -> Self {
        GenerationRequest::Mnemonic {
            word_count: 4,
            separator: "-".to_string(),
            append_number: true,
        }
    }

    /// Checks the request without clamping.
    pub fn validate(&self) -> Result<()> {
        match self {
            GenerationRequest::Random { length, .. } => check("length", *length, &LENGTH_RANGE),
            GenerationRequest::Mnemonic { word_count, .. } => {
                check("word count", *word_count, &WORD_COUNT_RANGE)
            }
            GenerationRequest::PersonalInfo { info, .. } => {
                if info.is_empty() {
                    return Err(Error::MissingPersonalInfo("personal info"));
                }
                Ok(())
            }
        }
    }

    /// Generates a password with the selected strategy.
    ///
    /// Only personal-info generation can fail, see
    /// [`generate_from_personal_info`].
    pub fn generate(&self) -> Result<GeneratedPassword> {
        match self {
            GenerationRequest::Random { length, complexity } => {
                Ok(generate_random(*length, *complexity))
            }
            GenerationRequest::Mnemonic {
                word_count,
                separator,
                append_number,
            } => Ok(generate_mnemonic(*word_count, separator, *append_number)),
            GenerationRequest::PersonalInfo { info, pattern } => {
                generate_from_personal_info(info, *pattern)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_clamp_in_range() {
        assert_eq!(clamp("length", 16, &LENGTH_RANGE), (16, None));
    }

    #[test]
    fn test_clamp_below_and_above() {
        let (low, warning) = clamp("length", 2, &LENGTH_RANGE);
        assert_eq!(low, 8);
        assert_eq!(
            warning,
            Some(ParameterWarning {
                parameter: "length",
                requested: 2,
                applied: 8,
            })
        );

        let (high, warning) = clamp("length", 500, &LENGTH_RANGE);
        assert_eq!(high, 64);
        assert!(warning.is_some());
    }

    #[test]
    fn test_warning_message() {
        let warning = ParameterWarning {
            parameter: "word count",
            requested: 9,
            applied: 6,
        };
        assert_eq!(warning.to_string(), "word count 9 is out of range, using 6");
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let request = GenerationRequest::Random {
            length: 4,
            complexity: Complexity::Low,
        };
        assert_eq!(
            request.validate(),
            Err(Error::InvalidParameter {
                parameter: "length",
                value: 4,
                min: 8,
                max: 64,
            })
        );

        let request = GenerationRequest::Mnemonic {
            word_count: 7,
            separator: "-".to_string(),
            append_number: false,
        };
        assert!(matches!(
            request.validate(),
            Err(Error::InvalidParameter { parameter: "word count", .. })
        ));
    }

    #[test]
    fn test_validate_empty_personal_info() {
        let request = GenerationRequest::PersonalInfo {
            info: PersonalInfo::new(),
            pattern: Pattern::Mixed,
        };
        assert_eq!(request.validate(), Err(Error::MissingPersonalInfo("personal info")));
    }

    #[test]
    fn test_request_defaults() {
        assert_eq!(
            GenerationRequest::default(),
            GenerationRequest::Random {
                length: 16,
                complexity: Complexity::High,
            }
        );
        assert_eq!(
            GenerationRequest::mnemonic(),
            GenerationRequest::Mnemonic {
                word_count: 4,
                separator: "-".to_string(),
                append_number: true,
            }
        );
        assert_eq!(Pattern::default(), Pattern::Mixed);
    }

    #[test]
    fn test_default_request_generates_high_complexity() {
        let request = GenerationRequest::default();
        assert!(request.validate().is_ok());

        let generated = request.generate().expect("random generation never fails");
        assert_eq!(generated.password.expose_secret().chars().count(), 16);
        assert!(generated.warnings.is_empty());
    }

    #[test]
    fn test_generate_dispatches_each_strategy() {
        let generated = GenerationRequest::mnemonic()
            .generate()
            .expect("mnemonic generation never fails");
        assert_eq!(generated.password.expose_secret().split('-').count(), 4);

        let info = PersonalInfo::new().with(PersonalField::FirstName, "Ada");
        let request = GenerationRequest::PersonalInfo {
            info: info.clone(),
            pattern: Pattern::NameBased,
        };
        let generated = request.generate().expect("name is present");
        let direct = generate_from_personal_info(&info, Pattern::NameBased).expect("name is present");
        assert_eq!(
            generated.password.expose_secret(),
            direct.password.expose_secret()
        );
    }

    #[test]
    fn test_generate_clamps_and_warns() {
        let request = GenerationRequest::Random {
            length: 100,
            complexity: Complexity::Medium,
        };
        let generated = request.generate().expect("random generation never fails");
        assert_eq!(generated.password.expose_secret().len(), 64);
        assert_eq!(generated.warnings.len(), 1);
    }
}
