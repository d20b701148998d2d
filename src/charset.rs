//! Character classes shared by the generator and the evaluator.

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*";

/// Returns `true` if `c` belongs to the fixed symbol set.
pub fn is_symbol(c: char) -> bool {
    c.is_ascii() && SYMBOLS.contains(&(c as u8))
}

/// Which character classes appear in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharClasses {
    pub fn of(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            classes.lowercase |= c.is_lowercase();
            classes.uppercase |= c.is_uppercase();
            classes.digit |= c.is_ascii_digit();
            classes.symbol |= is_symbol(c);
        }
        classes
    }

    /// Number of classes present (0-4).
    pub fn count(&self) -> u8 {
        [self.lowercase, self.uppercase, self.digit, self.symbol]
            .iter()
            .filter(|&&b| b)
            .count() as u8
    }

    /// Sum of the sizes of the classes present.
    pub fn pool_size(&self) -> u32 {
        let mut pool = 0;
        if self.lowercase {
            pool += LOWERCASE.len();
        }
        if self.uppercase {
            pool += UPPERCASE.len();
        }
        if self.digit {
            pool += DIGITS.len();
        }
        if self.symbol {
            pool += SYMBOLS.len();
        }
        pool as u32
    }
}
