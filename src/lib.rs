//! dotenvx - Load `.env` files with encrypted values into the environment.
//!
//! Values written as `encrypted:<base64>` are decrypted with a secp256k1
//! private key before being applied. The key is looked up, in order, in the
//! global key store (`~/.dotenvx/.env.keys.json`, matched by the file's
//! `DOTENV_PUBLIC_KEY`), the nearest `.env.keys` file, and finally the
//! `DOTENV_PRIVATE_KEY[_<PROFILE>]` environment variable.
//!
//! ```no_run
//! fn main() -> dotenvx::Result<()> {
//!     dotenvx::load()?;
//!     let bucket = std::env::var("S3_BUCKET").unwrap_or_default();
//!     println!("{bucket}");
//!     Ok(())
//! }
//! ```
//!
//! Loaded values always override variables that are already set.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Run a command with decrypted values
//! │   ├── get           # Print decrypted values
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Loader configuration
//!     ├── domain/       # Env mapping, profile, private key, classifier
//!     ├── cipher/       # ECIES decryption
//!     ├── store/        # Private key sources and resolver
//!     ├── sink          # Environment read/write abstraction
//!     └── loader        # Decrypt-and-apply pipeline
//! ```

use std::io::Read;
use std::path::Path;

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::Config;
pub use crate::core::domain::{Env, Profile};
pub use crate::core::loader::Loader;
pub use crate::core::sink::{EnvSink, EnvSource, MemoryEnv, ProcessEnv};
pub use crate::error::{Error, Result};

/// Load `.env` from the current directory into the process environment.
///
/// # Errors
///
/// See [`Loader::load_file`].
pub fn load() -> Result<()> {
    load_file(crate::core::constants::ENV_FILE)
}

/// Load a dotenv file into the process environment.
///
/// The profile comes from `APP_ENV`/`NODE_ENV`, or from a `.env.<profile>`
/// file name.
///
/// # Errors
///
/// See [`Loader::load_file`].
pub fn load_file(path: impl AsRef<Path>) -> Result<()> {
    let mut env = ProcessEnv;
    Loader::new(Config::from_env(&env)).load_file(path, &mut env)
}

/// Load dotenv text into the process environment with an explicit profile.
///
/// # Errors
///
/// See [`Loader::load_reader`].
pub fn load_reader(profile: &str, reader: impl Read) -> Result<()> {
    let mut env = ProcessEnv;
    Loader::new(Config::from_env(&env)).load_reader(&Profile::new(profile), reader, &mut env)
}
