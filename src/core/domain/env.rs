//! KvMap type.
//!
//! An ordered key/value view of an env file. Parsing is permissive: anything
//! that is not a `KEY=value` line is skipped, never rejected.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use tracing::trace;

use crate::core::constants::METADATA_PREFIX;
use crate::error::Result;

/// Whether a key is dotenvx bookkeeping rather than user data.
///
/// The single definition of the metadata rule; the diff engine, the
/// metadata-stripping writer and the encrypted-values check all go through it.
pub fn is_metadata_key(key: &str) -> bool {
    key.starts_with(METADATA_PREFIX)
}

/// Split an entry line into its trimmed key and raw value.
///
/// Returns `None` for blank lines, `#` comments, lines without `=` and lines
/// with an empty key. The raw value is everything after the first `=`,
/// including any line terminator.
pub fn split_entry(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Normalize a raw value: surrounding whitespace and one pair of matching
/// quotes are removed. dotenvx writes decrypted values back double quoted.
fn parse_value(raw: &str) -> &str {
    let value = raw.trim();

    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }

    value
}

/// Render a value so that parsing it back yields the same string.
///
/// Values with surrounding whitespace, quotes or `#` are wrapped in quotes;
/// double quotes unless the value itself holds one and no single quote.
/// Everything else is written bare.
pub fn format_value(value: &str) -> Cow<'_, str> {
    let needs_quotes = value.trim() != value || value.contains(['"', '\'', '#']);
    if !needs_quotes {
        return Cow::Borrowed(value);
    }

    let quote = if value.contains('"') && !value.contains('\'') {
        '\''
    } else {
        '"'
    };
    Cow::Owned(format!("{quote}{value}{quote}"))
}

/// Ordered key/value pairs parsed from env text.
///
/// Keys are unique. Re-inserting a key replaces its value but keeps its
/// original position, so iteration order is first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KvMap {
    entries: Vec<(String, String)>,
}

impl KvMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse env-format text.
    pub fn parse(text: &str) -> Self {
        let mut map = Self::new();

        for line in text.lines() {
            match split_entry(line) {
                Some((key, raw)) => map.insert(key, parse_value(raw)),
                None => trace!(line, "skipping non-entry line"),
            }
        }

        map
    }

    /// Read and parse an env file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read as UTF-8 text.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::parse(&contents))
    }

    /// Insert or overwrite a key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Iterate over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KvMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl fmt::Display for KvMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{}={}", key, format_value(value))?;
        }
        Ok(())
    }
}
