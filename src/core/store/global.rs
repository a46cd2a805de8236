//! Global key store.
//!
//! `~/.dotenvx/.env.keys.json` maps public key hex strings to keypair
//! records written by external tooling. Read-only here.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{KeySource, Lookup};
use crate::core::constants::{GLOBAL_STORE_DIR, GLOBAL_STORE_FILE};
use crate::core::domain::PrivateKey;
use crate::core::types::PublicKey;
use crate::error::StoreError;

/// One keypair record in the global store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStoreEntry {
    pub public_key: PublicKey,
    pub private_key: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Read the global store at its default location.
///
/// # Errors
///
/// Returns `StoreError::NoHomeDir`, `StoreError::Unreadable` (absent or
/// unreadable file) or `StoreError::Malformed` (invalid JSON).
pub fn read_global_store() -> std::result::Result<HashMap<PublicKey, KeyStoreEntry>, StoreError> {
    GlobalStore::new(GlobalStore::default_path()?).read()
}

/// Global key store source, keyed by the mapping's public key hint
#[derive(Debug, Clone)]
pub struct GlobalStore {
    path: PathBuf,
}

impl GlobalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store path (`~/.dotenvx/.env.keys.json`)
    pub fn default_path() -> std::result::Result<PathBuf, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
        Ok(home.join(GLOBAL_STORE_DIR).join(GLOBAL_STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the whole store
    pub fn read(&self) -> std::result::Result<HashMap<PublicKey, KeyStoreEntry>, StoreError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Unreadable {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeySource for GlobalStore {
    fn name(&self) -> &'static str {
        "global key store"
    }

    fn find(&self, lookup: &Lookup<'_>) -> Option<PrivateKey> {
        // Matched by public key, not variable name; one read per load.
        if lookup.name != lookup.profile.private_key_name() {
            return None;
        }
        let hint = lookup.public_key_hint()?;

        let entries = match self.read() {
            Ok(entries) => entries,
            Err(e) if e.is_not_found() => {
                debug!(path = %self.path.display(), "no global key store");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "ignoring global key store");
                return None;
            }
        };

        debug!(entries = entries.len(), "global key store read");

        entries
            .get(hint)
            .map(|entry| entry.private_key.as_str())
            .filter(|hex| !hex.is_empty())
            .map(|hex| PrivateKey::new(hex, self.name()))
    }
}
