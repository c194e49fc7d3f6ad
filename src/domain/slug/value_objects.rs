use crate::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PRIMARY_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("primary key pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub i64);

impl RecordId {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when `id` is not positive.
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "record id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Output of the slug policy's derivation. Only the policy constructs these, so a
/// record's slug target can only ever receive a derived value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivedSlug(String);

impl DerivedSlug {
    pub(crate) const fn new(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for DerivedSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<DerivedSlug> for String {
    fn from(value: DerivedSlug) -> Self {
        value.0
    }
}

impl fmt::Display for DerivedSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a caller-supplied identifier is resolved by the finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    PrimaryKey(RecordId),
    Slug(String),
    /// All digits, but not a usable primary key (zero or out of range).
    Unresolvable,
}

impl LookupKey {
    /// Classifies `identifier` after dropping one trailing line terminator.
    #[must_use]
    pub fn parse(identifier: &str) -> Self {
        let value = chomp(identifier);
        if !PRIMARY_KEY_PATTERN.is_match(value) {
            return Self::Slug(value.to_string());
        }

        value
            .parse::<i64>()
            .ok()
            .and_then(|id| RecordId::new(id).ok())
            .map_or(Self::Unresolvable, Self::PrimaryKey)
    }
}

/// Removes a single trailing `\n`, `\r\n` or `\r`.
#[must_use]
pub fn chomp(value: &str) -> &str {
    value
        .strip_suffix("\r\n")
        .or_else(|| value.strip_suffix('\n'))
        .or_else(|| value.strip_suffix('\r'))
        .unwrap_or(value)
}
