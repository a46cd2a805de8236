//! Environment access.
//!
//! The loader reads variables (profile inference, key fallback) through
//! [`EnvSource`] and writes results through [`EnvSink`], so callers can
//! substitute [`MemoryEnv`] for the real process environment.

use std::collections::BTreeMap;

use tracing::{trace, warn};

use crate::core::domain::Env;

/// Read access to environment variables.
pub trait EnvSource {
    /// Value of a variable, if set and valid Unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// Write access to environment variables.
pub trait EnvSink {
    /// Set a variable, overwriting any existing value.
    fn set(&mut self, key: &str, value: &str);
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSink for ProcessEnv {
    fn set(&mut self, key: &str, value: &str) {
        // set_var panics on these; skip instead.
        if key.is_empty() || key.contains('=') || key.contains('\0') || value.contains('\0') {
            warn!(key, "skipping variable with invalid name or value");
            return;
        }
        std::env::set_var(key, value);
    }
}

/// In-memory environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a variable
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl EnvSource for MemoryEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl EnvSink for MemoryEnv {
    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Write every entry of `env` into `sink`.
///
/// Loaded values always win over whatever the sink already holds.
pub fn apply(env: &Env, sink: &mut dyn EnvSink) {
    for (key, value) in env.iter() {
        trace!(key, "setting variable");
        sink.set(key, value);
    }
}
