//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::CharClasses;
use crate::sections::{
    Section, character_variety_section, entropy_section, length_section, repetition_section,
    weak_pattern_section,
};
use crate::types::{Rating, StrengthReport};

/// Estimates the entropy of a password in bits.
///
/// The pool size is the sum of the character classes actually present,
/// and each character contributes the bit length of that pool. Returns 0
/// for an empty password.
pub fn entropy_bits(password: &str) -> u64 {
    let pool = CharClasses::of(password).pool_size();
    pool_entropy(password.chars().count(), pool)
}

/// Saturates instead of overflowing on absurdly long input.
fn pool_entropy(length: usize, pool: u32) -> u64 {
    if pool == 0 {
        return 0;
    }
    let bits_per_char = u64::from(u32::BITS - pool.leading_zeros());
    (length as u64).saturating_mul(bits_per_char)
}

/// Evaluates password strength and returns a detailed report.
///
/// Every section runs; an empty password scores as `Weak` rather than
/// failing.
pub fn score(password: &SecretString) -> StrengthReport {
    let (report, _) = evaluate(password, || false);
    report
}

/// Evaluates password strength, checking `token` before each section.
///
/// Returns `None` if the evaluation was cancelled.
#[cfg(feature = "async")]
pub fn score_cancellable(
    password: &SecretString,
    token: Option<CancellationToken>,
) -> Option<StrengthReport> {
    let (report, completed) =
        evaluate(password, || token.as_ref().is_some_and(|t| t.is_cancelled()));
    completed.then_some(report)
}

/// Async version that sends the report via channel.
///
/// Nothing is sent if `token` is cancelled during the debounce or the
/// evaluation.
#[cfg(feature = "async")]
pub async fn score_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let Some(report) = score_cancellable(password, Some(token)) else {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled, no report sent");
        return;
    };

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength report: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

/// Runs all sections and builds the report. The flag is `false` if
/// `is_cancelled` stopped the run early, in which case the report is partial.
fn evaluate(password: &SecretString, is_cancelled: impl Fn() -> bool) -> (StrengthReport, bool) {
    let mut feedback = Vec::new();
    let mut score = 0;
    let mut completed = true;

    // Orchestrator: execute sections in sequence
    let sections: [(&str, Section); 5] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("entropy", entropy_section),
        ("pattern", weak_pattern_section),
        ("repetition", repetition_section),
    ];

    for (section_name, section_fn) in sections {
        if is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before section: {}", section_name);
            completed = false;
            break;
        }

        let result = section_fn(password);
        #[cfg(feature = "tracing")]
        tracing::trace!("section {} scored {}", section_name, result.points);
        #[cfg(not(feature = "tracing"))]
        let _ = section_name;

        score += result.points;
        if let Some(reason) = result.feedback {
            feedback.push(reason);
        }
    }

    let pwd = password.expose_secret();
    let report = StrengthReport {
        score,
        rating: Rating::from_score(score),
        entropy_bits: entropy_bits(pwd),
        feedback,
        length: pwd.chars().count(),
        variety: CharClasses::of(pwd).count(),
    };
    (report, completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_entropy_empty_password() {
        assert_eq!(entropy_bits(""), 0);
    }

    #[test]
    fn test_entropy_lowercase_only() {
        // pool 26 -> 5 bits per char
        assert_eq!(entropy_bits("aaaa"), 20);
    }

    #[test]
    fn test_entropy_all_classes() {
        // pool 70 -> 7 bits per char
        assert_eq!(entropy_bits("aB3!"), 28);
    }

    #[test]
    fn test_entropy_symbols_only() {
        // pool 8 -> bit length 4
        assert_eq!(entropy_bits("!@#$"), 16);
    }

    #[test]
    fn test_entropy_saturates_on_huge_length() {
        #[cfg(target_pointer_width = "64")]
        assert_eq!(pool_entropy(usize::MAX, 70), u64::MAX);
        assert_eq!(pool_entropy(700_000_000, 70), 4_900_000_000);
        assert_eq!(pool_entropy(usize::MAX, 0), 0);
    }

    #[test]
    fn test_evaluate_empty_password() {
        let report = score(&secret(""));
        assert_eq!(report.rating, Rating::Weak);
        assert_eq!(report.entropy_bits, 0);
        assert_eq!(report.length, 0);
        assert_eq!(report.score, 0);
        assert_eq!(
            report.feedback,
            vec![
                "Password too short (min 8 characters)",
                "Add more character types",
                "Low entropy - consider more randomness",
            ]
        );
    }

    #[test]
    fn test_evaluate_weak_pattern_applied_once() {
        // length +2, variety +2, entropy 48 -> 0, pattern -2
        let report = score(&secret("admin123"));
        assert_eq!(report.score, 2);
        assert_eq!(report.rating, Rating::Weak);
        let pattern_hits = report
            .feedback
            .iter()
            .filter(|r| r.contains("weak pattern"))
            .count();
        assert_eq!(pattern_hits, 1);
    }

    #[test]
    fn test_evaluate_substituted_password_not_denylisted() {
        // length +2, variety +4, entropy 63 -> +1
        let report = score(&secret("Passw0rd!"));
        assert_eq!(report.variety, 4);
        assert_eq!(report.entropy_bits, 63);
        assert_eq!(report.score, 7);
        assert_eq!(report.rating, Rating::Strong);
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn test_evaluate_very_strong_password() {
        // length +3, variety +4, entropy 112 -> +2
        let report = score(&secret("Xk9#mQ2$vL7&pR4!"));
        assert_eq!(report.score, 9);
        assert_eq!(report.rating, Rating::VeryStrong);
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn test_evaluate_repetitive_password() {
        // length +3, variety +3, entropy 72 -> +1, pattern 0, repetition -1
        let report = score(&secret("aaaaBBBB1111"));
        assert_eq!(report.score, 6);
        assert_eq!(report.feedback, vec!["Too many repeated characters"]);
    }

    #[test]
    fn test_evaluate_feedback_order_is_stable() {
        let pwd = secret("aaa123");
        let first = score(&pwd);
        let second = score(&pwd);
        assert_eq!(first, second);
        assert_eq!(
            first.feedback,
            vec![
                "Password too short (min 8 characters)",
                "Add more character types",
                "Low entropy - consider more randomness",
                "Contains common weak pattern",
            ]
        );
    }

    #[test]
    fn test_evaluate_negative_score() {
        // length 0, variety +1, entropy 0, pattern -2, repetition -1
        let report = score(&secret("123123"));
        assert_eq!(report.score, -2);
        assert_eq!(report.rating, Rating::Weak);
    }
}
