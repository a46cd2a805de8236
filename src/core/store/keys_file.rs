//! Local `.env.keys` file.
//!
//! Found by walking from a start directory up to the filesystem root and
//! taking the first directory that contains one.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{KeySource, Lookup};
use crate::core::constants::KEYS_FILE;
use crate::core::domain::{Env, PrivateKey};

/// Find the nearest `.env.keys` at or above `start`.
///
/// Only regular files count. Iterative; stops once a directory has no parent.
pub fn find_keys_file(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let candidate = dir.join(KEYS_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = dir.parent();
    }

    None
}

/// Key file source
#[derive(Debug, Clone)]
pub struct KeysFile {
    start: PathBuf,
}

impl KeysFile {
    /// Search upward from `start`
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
        }
    }
}

impl KeySource for KeysFile {
    fn name(&self) -> &'static str {
        "keys file"
    }

    fn find(&self, lookup: &Lookup<'_>) -> Option<PrivateKey> {
        let path = find_keys_file(&self.start)?;
        debug!(path = %path.display(), "found keys file");

        let keys = match Env::load(&path) {
            Ok(keys) => keys,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable keys file");
                return None;
            }
        };

        keys.get(&lookup.name)
            .filter(|hex| !hex.is_empty())
            .map(|hex| PrivateKey::new(hex, self.name()))
    }
}
