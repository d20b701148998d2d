//! Deterministic generation from personal information.
//!
//! The same fields always yield the same password, so a user can
//! regenerate it later from the same data. The fields are canonicalized as
//! key-sorted JSON and hashed with SHA-256; the hex digest drives the output.
//!
//! The canonical JSON uses `", "` and `": "` separators and escapes every
//! non-ASCII character as `\uXXXX`, so digests stay compatible with
//! passwords derived by earlier versions of the tool.

use serde::Serialize;
use serde_json::ser::Formatter;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::io;

use super::GeneratedPassword;
use crate::charset::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
use crate::error::{Error, Result};

const MAX_OUTPUT: usize = 16;
const MIXED_STEPS: usize = 8;
const NAME_CHARS: usize = 8;

/// Well-known personal attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FirstName,
    LastName,
    BirthYear,
    Nickname,
    FavoriteColor,
    City,
}

impl PersonalField {
    pub const ALL: [PersonalField; 6] = [
        PersonalField::FirstName,
        PersonalField::LastName,
        PersonalField::BirthYear,
        PersonalField::Nickname,
        PersonalField::FavoriteColor,
        PersonalField::City,
    ];

    /// Key used in the canonical form.
    pub fn key(&self) -> &'static str {
        match self {
            PersonalField::FirstName => "first_name",
            PersonalField::LastName => "last_name",
            PersonalField::BirthYear => "birth_year",
            PersonalField::Nickname => "nickname",
            PersonalField::FavoriteColor => "favorite_color",
            PersonalField::City => "city",
        }
    }
}

/// Personal attributes, kept sorted by key. Blank values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfo {
    fields: BTreeMap<String, String>,
}

impl PersonalInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`PersonalInfo::set`].
    pub fn with(mut self, field: PersonalField, value: impl AsRef<str>) -> Self {
        self.set(field, value);
        self
    }

    /// Sets a well-known field. A blank value removes it.
    pub fn set(&mut self, field: PersonalField, value: impl AsRef<str>) -> &mut Self {
        self.insert(field.key(), value)
    }

    /// Sets an arbitrary field. A blank value removes it.
    pub fn insert(&mut self, key: impl Into<String>, value: impl AsRef<str>) -> &mut Self {
        let key = key.into();
        let value = value.as_ref().trim();
        if value.is_empty() {
            self.fields.remove(&key);
        } else {
            self.fields.insert(key, value.to_string());
        }
        self
    }

    pub fn get(&self, field: PersonalField) -> Option<&str> {
        self.fields.get(field.key()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Key-sorted JSON object of the fields.
    fn canonical(&self) -> Result<Vec<u8>> {
        let mut ser = serde_json::Serializer::with_formatter(Vec::new(), CanonicalFormatter);
        self.fields
            .serialize(&mut ser)
            .map_err(|e| Error::Encoding(e.to_string()))?;
        Ok(ser.into_inner())
    }

    /// SHA-256 of the canonical form.
    fn digest(&self) -> Result<[u8; 32]> {
        Ok(Sha256::digest(self.canonical()?).into())
    }
}

/// Spaced separators and ASCII-only strings.
struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        for c in fragment.chars() {
            if c.is_ascii() && !c.is_ascii_control() {
                writer.write_all(&[c as u8])?;
                continue;
            }
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{:04x}", unit)?;
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for PersonalInfo {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut info = PersonalInfo::new();
        for (key, value) in iter {
            info.insert(key, value);
        }
        info
    }
}

/// How the digest is turned into a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pattern {
    /// Cycles lowercase, uppercase, digit and symbol characters picked by
    /// the digest. Always 8 characters.
    #[default]
    Mixed,
    /// Interleaves up to 8 name characters with digest hex characters.
    NameBased,
}

/// Derives a password from personal information.
///
/// # Errors
///
/// Returns [`Error::MissingPersonalInfo`] if `info` has no fields, or if
/// [`Pattern::NameBased`] is requested without a first or last name.
pub fn generate_from_personal_info(info: &PersonalInfo, pattern: Pattern) -> Result<GeneratedPassword> {
    if info.is_empty() {
        return Err(Error::MissingPersonalInfo("personal info"));
    }

    let digest = info.digest()?;
    let password = match pattern {
        Pattern::Mixed => mixed(&digest),
        Pattern::NameBased => name_based(info, &hex::encode(digest))?,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!("generated personal password: fields={} pattern={:?}", info.len(), pattern);

    Ok(GeneratedPassword::new(password, Vec::new()))
}

/// Step `k` reads digest byte `k` (the hex pair at index `2k`) and picks a
/// character from class `k mod 4`.
fn mixed(digest: &[u8]) -> String {
    let classes: [&[u8]; 4] = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS];
    digest
        .iter()
        .take(MIXED_STEPS)
        .enumerate()
        .map(|(step, &value)| {
            let class = classes[step % classes.len()];
            class[usize::from(value) % class.len()] as char
        })
        .take(MAX_OUTPUT)
        .collect()
}

fn name_based(info: &PersonalInfo, hex_digest: &str) -> Result<String> {
    let base: String = [PersonalField::FirstName, PersonalField::LastName]
        .iter()
        .filter_map(|field| info.get(*field))
        .collect();
    if base.is_empty() {
        return Err(Error::MissingPersonalInfo("first or last name"));
    }

    let mut hex_chars = hex_digest.chars();
    let mut password = String::new();
    for c in base.chars().take(NAME_CHARS) {
        password.push(c);
        if let Some(h) = hex_chars.next() {
            password.push(h);
        }
    }
    Ok(password.chars().take(MAX_OUTPUT).collect())
}
