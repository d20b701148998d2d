//! In-memory password history.
//!
//! The history is owned by the caller and lives for the session only. It is
//! append-only; share it across threads behind a `Mutex` if needed.

use chrono::{DateTime, Local};
use secrecy::SecretString;

use crate::evaluator::score;
use crate::types::StrengthReport;

#[derive(Debug)]
pub struct HistoryEntry {
    pub password: SecretString,
    pub timestamp: DateTime<Local>,
    /// What the password was generated for, e.g. "Memorable Password".
    pub purpose: String,
    pub strength: StrengthReport,
}

#[derive(Debug, Default)]
pub struct PasswordHistory {
    entries: Vec<HistoryEntry>,
}

impl PasswordHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores `password` and appends it to the history.
    pub fn record(&mut self, password: SecretString, purpose: impl Into<String>) -> &HistoryEntry {
        let strength = score(&password);
        self.record_scored(password, purpose, strength)
    }

    /// Appends a password whose report is already known.
    pub fn record_scored(
        &mut self,
        password: SecretString,
        purpose: impl Into<String>,
        strength: StrengthReport,
    ) -> &HistoryEntry {
        let entry = HistoryEntry {
            password,
            timestamp: Local::now(),
            purpose: purpose.into(),
            strength,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!("recorded history entry: purpose={} rating={}", entry.purpose, entry.strength.rating);

        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Up to `n` entries, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev().take(n)
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;
    use secrecy::ExposeSecret;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_record_scores_password() {
        let mut history = PasswordHistory::new();
        let entry = history.record(secret("admin123"), "Check");
        assert_eq!(entry.purpose, "Check");
        assert_eq!(entry.strength.rating, Rating::Weak);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut history = PasswordHistory::new();
        for pwd in ["first", "second", "third"] {
            history.record(secret(pwd), "Test");
        }

        let recent: Vec<&str> = history
            .recent(2)
            .map(|e| e.password.expose_secret())
            .collect();
        assert_eq!(recent, vec!["third", "second"]);

        let all: Vec<&str> = history.iter().map(|e| e.password.expose_secret()).collect();
        assert_eq!(all, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_timestamps_are_ordered() {
        let mut history = PasswordHistory::new();
        history.record(secret("one"), "Test");
        history.record(secret("two"), "Test");
        let stamps: Vec<_> = history.iter().map(|e| e.timestamp).collect();
        assert!(stamps[0] <= stamps[1]);
    }

    #[test]
    fn test_empty_history() {
        let history = PasswordHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.recent(10).count(), 0);
    }
}
