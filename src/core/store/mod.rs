//! Private key resolution.
//!
//! A [`Resolver`] walks an ordered list of [`KeySource`]s and returns the
//! first private key any of them produces. The whole list is tried for
//! `DOTENV_PRIVATE_KEY_<PROFILE>` before it is tried again for
//! `DOTENV_PRIVATE_KEY`. The default order is:
//!
//! 1. [`GlobalStore`]: `~/.dotenvx/.env.keys.json`, matched by the
//!    `DOTENV_PUBLIC_KEY*` hint in the mapping (optional)
//! 2. [`KeysFile`]: nearest `.env.keys`, searching upward
//! 3. [`ProcessVars`]: the environment itself
//!
//! ## Adding a New Key Source
//!
//! 1. Implement the `KeySource` trait
//! 2. Add the implementation in a new file
//! 3. Insert it into the list built by `Resolver::from_config`

use tracing::debug;

use crate::core::config::Config;
use crate::core::domain::{Env, PrivateKey, Profile};
use crate::core::sink::EnvSource;
use crate::error::{KeyError, Result};

mod global;
mod keys_file;
mod process;

pub use global::{read_global_store, GlobalStore, KeyStoreEntry};
pub use keys_file::{find_keys_file, KeysFile};
pub use process::ProcessVars;

/// Everything a key source may consult for one load.
pub struct Lookup<'a> {
    /// Active profile
    pub profile: &'a Profile,
    /// The mapping being loaded (source of the public key hint)
    pub env: &'a Env,
    /// Variable name being looked up
    pub name: String,
    /// Environment for variable fallbacks
    pub vars: &'a dyn EnvSource,
}

impl<'a> Lookup<'a> {
    pub fn new(profile: &'a Profile, env: &'a Env, vars: &'a dyn EnvSource) -> Self {
        Self {
            profile,
            env,
            name: profile.private_key_name(),
            vars,
        }
    }

    /// Same lookup for a different variable name
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            profile: self.profile,
            env: self.env,
            name: name.into(),
            vars: self.vars,
        }
    }

    /// Public key hint carried by the mapping, if any.
    pub fn public_key_hint(&self) -> Option<&'a str> {
        self.env.public_key_hint(self.profile)
    }
}

/// A place private keys can come from.
pub trait KeySource {
    /// Source name for logging
    fn name(&self) -> &'static str;

    /// Look up a private key.
    ///
    /// Misses (including unreadable backing files) return `None`; a source
    /// never aborts resolution.
    fn find(&self, lookup: &Lookup<'_>) -> Option<PrivateKey>;
}

/// Ordered list of key sources; first hit wins.
pub struct Resolver {
    sources: Vec<Box<dyn KeySource>>,
}

impl Resolver {
    /// Resolver over an explicit list of sources
    pub fn new(sources: Vec<Box<dyn KeySource>>) -> Self {
        Self { sources }
    }

    /// Default source list for a configuration.
    ///
    /// The global store is left out when disabled or when no path can be
    /// determined; the key file search is left out when no start directory
    /// can be determined.
    pub fn from_config(config: &Config) -> Self {
        let mut sources: Vec<Box<dyn KeySource>> = Vec::new();

        if config.global_store {
            match config.global_store_path() {
                Ok(path) => sources.push(Box::new(GlobalStore::new(path))),
                Err(e) => debug!(error = %e, "global key store unavailable"),
            }
        }

        match config.search_from() {
            Ok(dir) => sources.push(Box::new(KeysFile::new(dir))),
            Err(e) => debug!(error = %e, "key file search unavailable"),
        }

        sources.push(Box::new(ProcessVars));

        Self::new(sources)
    }

    /// Names of the configured sources, in order
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Resolve one private key for a load.
    ///
    /// Names come from the lookup's profile, most specific first; every
    /// source is asked for a name before the next name is tried.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NotFound` if no source yields a non-empty key.
    pub fn resolve(&self, lookup: &Lookup<'_>) -> Result<PrivateKey> {
        for name in lookup.profile.private_key_names() {
            let lookup = lookup.with_name(name);
            for source in &self.sources {
                match source.find(&lookup) {
                    Some(key) if !key.as_hex().is_empty() => {
                        debug!(source = source.name(), name = %lookup.name, "private key resolved");
                        return Ok(key);
                    }
                    _ => debug!(source = source.name(), name = %lookup.name, "no private key"),
                }
            }
        }

        Err(KeyError::NotFound {
            name: lookup.profile.private_key_name(),
        }
        .into())
    }
}
