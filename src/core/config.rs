//! Loader configuration.
//!
//! Controls which key sources run and where they look. Defaults match
//! dotenvx: global store enabled at `~/.dotenvx/.env.keys.json`, key file
//! search from the current directory, profile from `APP_ENV`/`NODE_ENV`.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::core::constants::{KEYSTORE_VAR, MAX_PROFILE_VARS, NO_GLOBAL_STORE_VAR, PROFILE_VARS};
use crate::core::sink::EnvSource;
use crate::core::store::GlobalStore;
use crate::error::Result;

/// Configuration for one [`Loader`](crate::core::loader::Loader)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Consult the global key store
    pub global_store: bool,
    /// Global key store location; `None` means the default under HOME
    pub global_store_path: Option<PathBuf>,
    /// Start of the `.env.keys` search; `None` means the current directory
    pub search_from: Option<PathBuf>,
    /// Variables checked, in order, to infer the profile for file loads
    pub profile_vars: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global_store: true,
            global_store_path: None,
            search_from: None,
            profile_vars: PROFILE_VARS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with environment overrides applied.
    ///
    /// - `DOTENVX_KEYSTORE` sets the global store path
    /// - `DOTENVX_NO_GLOBAL_STORE` (`1`, `true`, `yes`) disables the store
    pub fn from_env(vars: &dyn EnvSource) -> Self {
        let mut config = Self::default();

        if let Some(path) = vars.var(KEYSTORE_VAR).filter(|p| !p.is_empty()) {
            debug!(path = %path, "global key store path from environment");
            config.global_store_path = Some(PathBuf::from(path));
        }

        if vars.var(NO_GLOBAL_STORE_VAR).is_some_and(|v| is_truthy(&v)) {
            debug!("global key store disabled from environment");
            config.global_store = false;
        }

        config
    }

    /// Skip the global key store
    pub fn without_global_store(mut self) -> Self {
        self.global_store = false;
        self
    }

    /// Read the global key store from `path`
    pub fn with_global_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_store_path = Some(path.into());
        self
    }

    /// Start the `.env.keys` search at `dir`
    pub fn with_search_from(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_from = Some(dir.into());
        self
    }

    /// Add a profile-inference variable, up to five in total
    pub fn with_profile_var(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if self.profile_vars.len() >= MAX_PROFILE_VARS {
            warn!(var = %name, "profile variable slots full, ignoring");
        } else if !self.profile_vars.contains(&name) {
            self.profile_vars.push(name);
        }
        self
    }

    /// Effective global key store path
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoHomeDir` if no override is set and HOME is unknown.
    pub fn global_store_path(&self) -> Result<PathBuf> {
        match &self.global_store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(GlobalStore::default_path()?),
        }
    }

    /// Effective start directory for the `.env.keys` search
    ///
    /// # Errors
    ///
    /// Returns an IO error if the current directory cannot be determined.
    pub fn search_from(&self) -> Result<PathBuf> {
        match &self.search_from {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
