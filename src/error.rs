//! Error types for password generation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{parameter} must be between {min} and {max}, got {value}")]
    InvalidParameter {
        parameter: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    #[error("Nothing to derive a password from: missing {0}")]
    MissingPersonalInfo(&'static str),
    #[error("Failed to encode personal info: {0}")]
    Encoding(String),
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = Error::InvalidParameter {
            parameter: "length",
            value: 4,
            min: 8,
            max: 64,
        };
        assert_eq!(err.to_string(), "length must be between 8 and 64, got 4");
    }

    #[test]
    fn test_missing_personal_info_message() {
        let err = Error::MissingPersonalInfo("first or last name");
        assert_eq!(
            err.to_string(),
            "Nothing to derive a password from: missing first or last name"
        );
    }
}
