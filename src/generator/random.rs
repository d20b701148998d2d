//! Random charset-based generation.

use rand::{CryptoRng, Rng};
use secrecy::{ExposeSecret, SecretString};

use super::{GeneratedPassword, LENGTH_RANGE, clamp};
use crate::charset::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE, is_symbol};
use crate::csprng;

/// Character pool preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Complexity {
    /// Lowercase letters and digits.
    Low,
    /// Letters and digits.
    Medium,
    /// Letters, digits and `!@#$%^&*`. Output always holds at least one
    /// symbol and one uppercase letter.
    #[default]
    High,
}

impl Complexity {
    /// Characters random generation draws from.
    pub fn pool(&self) -> Vec<u8> {
        let sets: &[&[u8]] = match self {
            Complexity::Low => &[LOWERCASE, DIGITS],
            Complexity::Medium => &[UPPERCASE, LOWERCASE, DIGITS],
            Complexity::High => &[UPPERCASE, LOWERCASE, DIGITS, SYMBOLS],
        };
        sets.concat()
    }
}

/// Generates a random password of `length` characters.
///
/// Characters are drawn uniformly and independently from the complexity
/// pool using the OS random source. `length` is clamped to 8-64.
///
/// For `High`, a password missing a symbol or an uppercase letter gets one
/// position overwritten with the missing class. This slightly lowers the
/// true entropy in exchange for a guaranteed character mix.
pub fn generate_random(length: usize, complexity: Complexity) -> GeneratedPassword {
    let (length, warning) = clamp("length", length, &LENGTH_RANGE);
    let password = random_password(&mut csprng(), length, complexity);

    #[cfg(feature = "tracing")]
    tracing::debug!("generated random password: length={} complexity={:?}", length, complexity);

    GeneratedPassword::new(password, warning.into_iter().collect())
}

/// Generates a `High` complexity replacement for a weak password.
///
/// The new length is `max(12, len + extra)`, clamped to 8-64.
pub fn stronger_alternative(password: &SecretString, extra: usize) -> GeneratedPassword {
    let current = password.expose_secret().chars().count();
    let length = current.saturating_add(extra).max(12);
    generate_random(length, Complexity::High)
}

fn random_password<R: Rng + CryptoRng>(
    rng: &mut R,
    length: usize,
    complexity: Complexity,
) -> String {
    let pool = complexity.pool();
    let mut chars: Vec<char> = (0..length).map(|_| pick(rng, &pool)).collect();

    if complexity == Complexity::High {
        ensure_mix(rng, &mut chars);
    }
    chars.into_iter().collect()
}

fn pick<R: Rng>(rng: &mut R, set: &[u8]) -> char {
    set[rng.gen_range(0..set.len())] as char
}

/// Injects a symbol and an uppercase letter if either is missing.
fn ensure_mix<R: Rng>(rng: &mut R, chars: &mut [char]) {
    if chars.is_empty() {
        return;
    }

    if !chars.iter().any(|&c| is_symbol(c)) {
        let pos = rng.gen_range(0..chars.len());
        chars[pos] = pick(rng, SYMBOLS);
    }

    if !chars.iter().any(|c| c.is_ascii_uppercase()) {
        // Never overwrite the only symbol.
        let symbols = chars.iter().filter(|&&c| is_symbol(c)).count();
        let candidates: Vec<usize> = (0..chars.len())
            .filter(|&i| symbols > 1 || !is_symbol(chars[i]))
            .collect();
        if candidates.is_empty() {
            return;
        }
        let pos = candidates[rng.gen_range(0..candidates.len())];
        chars[pos] = pick(rng, UPPERCASE);
    }
}
