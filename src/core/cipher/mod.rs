//! Cryptographic operations.
//!
//! Decryption of `encrypted:` values. The only backend is ECIES over
//! secp256k1, the scheme dotenvx uses for its payloads.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::core::domain::PrivateKey;
use crate::error::Result;

mod ecies;

pub use self::ecies::Ecies;

/// Cryptographic backend trait.
pub trait Cipher {
    /// Type representing a private identity/key.
    type Identity;

    /// Decrypt a value using a private identity.
    ///
    /// # Arguments
    ///
    /// * `encrypted` - Encrypted value, with or without the `encrypted:` prefix
    /// * `identity` - Private key/identity
    ///
    /// # Returns
    ///
    /// The decrypted plaintext string.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the key or payload is malformed, or if
    /// decryption fails.
    fn decrypt(&self, encrypted: &str, identity: &Self::Identity) -> Result<String>;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}

/// Decrypt a dotenvx value with the default ECIES backend.
///
/// This is a convenience wrapper around `Ecies::decrypt`.
///
/// # Errors
///
/// Returns `CipherError` if decryption fails or the key doesn't match.
pub fn decrypt(key: &PrivateKey, encrypted: &str) -> Result<String> {
    Ecies.decrypt(encrypted, key)
}
