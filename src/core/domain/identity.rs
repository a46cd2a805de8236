//! Private key type.
//!
//! Wraps a hex-encoded secp256k1 private key with secure memory handling.

use zeroize::Zeroizing;

use crate::error::{CipherError, Result};

/// Length of a raw secp256k1 secret key.
const SECRET_KEY_LEN: usize = 32;

/// A private key for decrypting values, tagged with where it was found
#[derive(Clone)]
pub struct PrivateKey {
    hex: Zeroizing<String>,
    source: &'static str,
}

impl PrivateKey {
    /// Wrap a hex key string found in `source`
    pub fn new(hex: impl Into<String>, source: &'static str) -> Self {
        Self {
            hex: Zeroizing::new(hex.into()),
            source,
        }
    }

    /// Hex representation
    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    /// Name of the key source that produced this key
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Decode to raw secret key bytes
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidPrivateKey` if the hex is malformed or the
    /// key is not 32 bytes long.
    pub fn to_bytes(&self) -> Result<Zeroizing<Vec<u8>>> {
        let bytes = Zeroizing::new(
            hex::decode(self.hex.trim())
                .map_err(|e| CipherError::InvalidPrivateKey(e.to_string()))?,
        );

        if bytes.len() != SECRET_KEY_LEN {
            return Err(CipherError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                SECRET_KEY_LEN,
                bytes.len()
            ))
            .into());
        }

        Ok(bytes)
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("hex", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}
