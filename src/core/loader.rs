//! Decrypt-and-apply pipeline.
//!
//! One load: parse the source, resolve a single private key if any value
//! is encrypted, decrypt every encrypted value, then write the whole
//! mapping to the environment. Nothing is written unless every value
//! decrypted.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info_span};

use crate::core::cipher::{Cipher, Ecies};
use crate::core::config::Config;
use crate::core::domain::{is_encrypted, Env, Profile};
use crate::core::sink::{self, EnvSink, EnvSource};
use crate::core::store::{Lookup, Resolver};
use crate::error::Result;

/// Loads dotenv sources into an environment
pub struct Loader {
    config: Config,
    resolver: Resolver,
    cipher: Ecies,
}

impl Loader {
    /// Loader with the default key sources for `config`
    pub fn new(config: Config) -> Self {
        let resolver = Resolver::from_config(&config);
        Self::with_resolver(config, resolver)
    }

    /// Loader with a custom resolver
    pub fn with_resolver(config: Config, resolver: Resolver) -> Self {
        Self {
            config,
            resolver,
            cipher: Ecies,
        }
    }

    /// Load a dotenv file into `target`.
    ///
    /// The profile is inferred from the configured profile variables, then
    /// from a `.env.<profile>` file name.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the file cannot be read or parsed,
    /// `KeyError::NotFound` if encrypted values exist but no key does, or
    /// `CipherError` if any value fails to decrypt. `target` is untouched
    /// on error.
    pub fn load_file<T>(&self, path: impl AsRef<Path>, target: &mut T) -> Result<()>
    where
        T: EnvSource + EnvSink,
    {
        let (_, env) = self.decrypt_file(path, target)?;
        sink::apply(&env, target);
        Ok(())
    }

    /// Load dotenv text from a reader into `target` with an explicit profile.
    ///
    /// # Errors
    ///
    /// Same as [`load_file`](Self::load_file).
    pub fn load_reader<R, T>(&self, profile: &Profile, reader: R, target: &mut T) -> Result<()>
    where
        R: Read,
        T: EnvSource + EnvSink,
    {
        let env = Env::parse(reader)?;
        self.load_env(profile, env, target)
    }

    /// Decrypt an already-parsed mapping and apply it to `target`.
    ///
    /// # Errors
    ///
    /// Returns `KeyError` or `CipherError`; `target` is untouched on error.
    pub fn load_env<T>(&self, profile: &Profile, env: Env, target: &mut T) -> Result<()>
    where
        T: EnvSource + EnvSink,
    {
        let env = self.decrypt(profile, env, target)?;
        sink::apply(&env, target);
        Ok(())
    }

    /// Parse and decrypt a dotenv file without applying it.
    ///
    /// Returns the inferred profile alongside the plaintext mapping.
    ///
    /// # Errors
    ///
    /// Same as [`load_file`](Self::load_file).
    pub fn decrypt_file(
        &self,
        path: impl AsRef<Path>,
        vars: &dyn EnvSource,
    ) -> Result<(Profile, Env)> {
        let path = path.as_ref();
        let profile = Profile::infer(path, vars, self.config.profile_vars.as_slice());
        let env = Env::load(path)?;

        let _span = info_span!("load", path = %path.display(), profile = %profile).entered();
        let env = self.decrypt(&profile, env, vars)?;
        Ok((profile, env))
    }

    /// Replace every encrypted value in `env` with its plaintext.
    ///
    /// Resolves the private key once, and only if some value is encrypted.
    /// The first failure aborts; the partially decrypted mapping is dropped.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NotFound` or `CipherError`.
    pub fn decrypt(&self, profile: &Profile, mut env: Env, vars: &dyn EnvSource) -> Result<Env> {
        let encrypted = env.encrypted_count();
        debug!(entries = env.len(), encrypted, "classified values");

        if encrypted == 0 {
            return Ok(env);
        }

        let key = {
            let lookup = Lookup::new(profile, &env, vars);
            self.resolver.resolve(&lookup)?
        };
        debug!(source = key.source(), cipher = self.cipher.name(), "decrypting values");

        for (name, value) in env.iter_mut() {
            if is_encrypted(value) {
                *value = self.cipher.decrypt(value, &key).map_err(|e| {
                    debug!(key = name, "decryption failed");
                    e
                })?;
            }
        }

        Ok(env)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
