//! Password generation and strength evaluation library
//!
//! This library generates passwords through interchangeable strategies
//! (random charset-based, word mnemonic, personal-info derived) and scores
//! password strength with a heuristic rubric.
//!
//! # Features
//!
//! - `async` (default): Enables async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_forge::{Complexity, PasswordHistory, generate_random, score};
//!
//! let generated = generate_random(16, Complexity::High);
//! for warning in &generated.warnings {
//!     println!("{}", warning);
//! }
//!
//! let report = score(&generated.password);
//! println!("Rating: {} ({} bits)", report.rating, report.entropy_bits);
//!
//! let mut history = PasswordHistory::new();
//! history.record(generated.password, "Random Password");
//! ```

// Internal modules
mod charset;
mod denylist;
mod error;
mod evaluator;
mod generator;
mod history;
mod sections;
mod types;

// Public API
pub use denylist::{WEAK_PATTERNS, find_weak_pattern, is_denylisted};
pub use error::{Error, Result};
pub use evaluator::{entropy_bits, score};
pub use generator::{
    BulkStyle, COUNT_RANGE, Complexity, GeneratedBatch, GeneratedPassword, GenerationRequest,
    LENGTH_RANGE, ParameterWarning, Pattern, PersonalField, PersonalInfo, ScoredPassword,
    WORD_BANK, WORD_COUNT_RANGE, bulk_generate, generate_from_personal_info, generate_mnemonic,
    generate_random, stronger_alternative,
};
pub use history::{HistoryEntry, PasswordHistory};
pub use types::{Rating, StrengthReport};

#[cfg(feature = "async")]
pub use evaluator::{score_cancellable, score_tx};

/// Cryptographically secure RNG used by every random strategy.
pub(crate) fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}
