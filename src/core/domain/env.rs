//! Env type.
//!
//! The key/value mapping read from one dotenv source. Parsing is delegated
//! to `dotenvy`; this type owns the entries for the duration of a load and
//! is mutated in place as encrypted values are replaced by plaintext.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::trace;

use crate::core::constants::PUBLIC_KEY_PREFIX;
use crate::core::domain::{secret, Profile};
use crate::error::{ParseError, Result};

/// A parsed dotenv mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    entries: Vec<(String, String)>,
}

impl Env {
    /// Empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dotenv file from disk
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Read` if the file cannot be opened, or
    /// `ParseError::Line` if a line is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        trace!(path = %path.display(), "reading env file");

        let file = File::open(path).map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(file)
    }

    /// Parse dotenv text from any reader
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the text is malformed or the reader fails.
    pub fn parse<R: Read>(reader: R) -> Result<Self> {
        let mut env = Self::new();

        for item in dotenvy::from_read_iter(reader) {
            let (key, value) = item.map_err(ParseError::from)?;
            env.insert(key, value);
        }

        trace!(entries = env.len(), "parsed env");
        Ok(env)
    }

    /// Create from raw key-value pairs
    ///
    /// Later duplicates replace earlier ones.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut env = Self::new();
        for (key, value) in pairs {
            env.insert(key, value);
        }
        env
    }

    /// Set a value, replacing an existing entry in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate entries in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate entries with mutable values
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut String)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of values carrying the `encrypted:` sentinel
    pub fn encrypted_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, v)| secret::is_encrypted(v))
            .count()
    }

    /// Public key hint for the global key store.
    ///
    /// Prefers `DOTENV_PUBLIC_KEY_<PROFILE>`, then the first non-empty
    /// `DOTENV_PUBLIC_KEY*` entry in file order.
    pub fn public_key_hint(&self, profile: &Profile) -> Option<&str> {
        let scoped = profile.public_key_name();

        self.get(&scoped)
            .filter(|v| !v.is_empty())
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(k, v)| k.starts_with(PUBLIC_KEY_PREFIX) && !v.is_empty())
                    .map(|(_, v)| v.as_str())
            })
    }

    /// Serialize as a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }

    /// Serialize to dotenv format string
    ///
    /// Quotes values that contain spaces or special characters.
    fn to_env_string(&self) -> String {
        let mut output = String::new();

        for (key, value) in &self.entries {
            if needs_quotes(value) {
                output.push_str(&format!("{}=\"{}\"\n", key, escape_env_value(value)));
            } else {
                output.push_str(&format!("{}={}\n", key, value));
            }
        }

        output
    }
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.chars().any(|ch| ch.is_whitespace())
        || value.contains('#')
        || value.contains('=')
        || value.contains('"')
        || value.contains('\'')
        || value.contains('\\')
        || value.contains('$')
}

fn escape_env_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '$' => escaped.push_str("\\$"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }

    escaped
}

impl std::fmt::Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_env_string())
    }
}
