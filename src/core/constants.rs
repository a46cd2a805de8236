//! Constants used throughout dotenvx.
//!
//! Centralizes magic strings and configuration values.

/// Prefix marking a value as ciphertext.
pub const ENCRYPTED_PREFIX: &str = "encrypted:";

/// Default environment file name (.env).
pub const ENV_FILE: &str = ".env";

/// Local key file name, discovered by upward directory search.
pub const KEYS_FILE: &str = ".env.keys";

/// Unscoped private key variable name.
pub const PRIVATE_KEY_NAME: &str = "DOTENV_PRIVATE_KEY";

/// Public key variable prefix; matched as a key prefix, not an exact name.
pub const PUBLIC_KEY_PREFIX: &str = "DOTENV_PUBLIC_KEY";

/// Global key store directory relative to HOME (~/.dotenvx).
pub const GLOBAL_STORE_DIR: &str = ".dotenvx";

/// Global key store file name inside [`GLOBAL_STORE_DIR`].
pub const GLOBAL_STORE_FILE: &str = ".env.keys.json";

/// Variables consulted, in order, to infer the profile.
pub const PROFILE_VARS: &[&str] = &["APP_ENV", "NODE_ENV"];

/// Number of profile-inference variable slots.
pub const MAX_PROFILE_VARS: usize = 5;

/// Overrides the global key store path.
pub const KEYSTORE_VAR: &str = "DOTENVX_KEYSTORE";

/// Disables the global key store lookup when truthy.
pub const NO_GLOBAL_STORE_VAR: &str = "DOTENVX_NO_GLOBAL_STORE";

/// Log filter for the binary.
pub const LOG_VAR: &str = "DOTENVX_LOG";
