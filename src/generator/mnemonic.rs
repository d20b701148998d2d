//! Word-mnemonic generation.

use rand::{CryptoRng, Rng};

use super::{GeneratedPassword, WORD_COUNT_RANGE, clamp};
use crate::csprng;

/// Words mnemonic passwords are drawn from.
pub const WORD_BANK: &[&str] = &[
    "red", "blue", "green", "gold", "silver", "dragon", "phoenix", "tiger", "lion", "eagle",
    "wolf", "bear", "ocean", "river", "mountain", "forest", "sun", "moon", "star", "cloud",
    "wind", "fire", "ice", "earth", "king", "queen", "knight", "wizard", "dwarf", "elf", "giant",
    "angel",
];

/// Generates a memorable password such as `Red-Dragon-Moon-Wolf42`.
///
/// Words are drawn independently with replacement, so the same word may
/// appear twice. `word_count` is clamped to 3-6.
pub fn generate_mnemonic(
    word_count: usize,
    separator: &str,
    append_number: bool,
) -> GeneratedPassword {
    let (word_count, warning) = clamp("word count", word_count, &WORD_COUNT_RANGE);
    let password = mnemonic_password(&mut csprng(), word_count, separator, append_number);

    #[cfg(feature = "tracing")]
    tracing::debug!("generated mnemonic password: words={} number={}", word_count, append_number);

    GeneratedPassword::new(password, warning.into_iter().collect())
}

fn mnemonic_password<R: Rng + CryptoRng>(
    rng: &mut R,
    word_count: usize,
    separator: &str,
    append_number: bool,
) -> String {
    let words: Vec<String> = (0..word_count)
        .map(|_| capitalize(WORD_BANK[rng.gen_range(0..WORD_BANK.len())]))
        .collect();

    let mut password = words.join(separator);
    if append_number {
        password.push_str(&rng.gen_range(10..=99).to_string());
    }
    password
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
