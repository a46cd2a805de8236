//! ECIES backend implementation.
//!
//! Payloads are base64 (standard alphabet) over the raw ECIES ciphertext:
//! ephemeral public key, AES-256-GCM nonce, tag and encrypted bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::trace;

use super::Cipher;
use crate::core::domain::{strip_sentinel, PrivateKey};
use crate::error::{CipherError, Result};

/// ECIES (secp256k1) backend
#[derive(Debug, Default, Clone, Copy)]
pub struct Ecies;

impl Cipher for Ecies {
    type Identity = PrivateKey;

    fn name(&self) -> &'static str {
        "ecies"
    }

    fn decrypt(&self, encrypted: &str, identity: &PrivateKey) -> Result<String> {
        let secret = identity.to_bytes()?;

        let payload = strip_sentinel(encrypted);
        let ciphertext = STANDARD
            .decode(payload)
            .map_err(|e| CipherError::InvalidPayload(e.to_string()))?;

        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let plaintext = ::ecies::decrypt(&secret, &ciphertext)
            .map_err(|e| CipherError::DecryptionFailed(format!("{:?}", e)))?;

        trace!(plaintext_len = plaintext.len(), "decrypted");

        String::from_utf8(plaintext)
            .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn keypair() -> (PrivateKey, Vec<u8>) {
        let (sk, pk) = ::ecies::utils::generate_keypair();
        (
            PrivateKey::new(hex::encode(sk.serialize()), "test"),
            pk.serialize_compressed().to_vec(),
        )
    }

    fn seal(public: &[u8], plaintext: &str) -> String {
        let ciphertext = ::ecies::encrypt(public, plaintext.as_bytes()).unwrap();
        format!("encrypted:{}", STANDARD.encode(ciphertext))
    }

    #[test]
    fn test_decrypt_roundtrip() {
        let (key, public) = keypair();
        let sealed = seal(&public, "my-bucket");

        assert_eq!(Ecies.decrypt(&sealed, &key).unwrap(), "my-bucket");
    }

    #[test]
    fn test_decrypt_without_prefix() {
        let (key, public) = keypair();
        let sealed = seal(&public, "hello");
        let bare = strip_sentinel(&sealed);

        assert_eq!(Ecies.decrypt(bare, &key).unwrap(), "hello");
    }

    #[test]
    fn test_decrypt_unicode_and_empty() {
        let (key, public) = keypair();

        assert_eq!(Ecies.decrypt(&seal(&public, "héllo 🔑"), &key).unwrap(), "héllo 🔑");
        assert_eq!(Ecies.decrypt(&seal(&public, ""), &key).unwrap(), "");
    }

    #[test]
    fn test_decrypt_wrong_key_fails() {
        let (_, public) = keypair();
        let (other, _) = keypair();
        let sealed = seal(&public, "secret");

        let err = Ecies.decrypt(&sealed, &other).unwrap_err();
        assert!(matches!(err, Error::Cipher(CipherError::DecryptionFailed(_))));
    }

    #[test]
    fn test_decrypt_bad_base64_fails() {
        let (key, _) = keypair();

        let err = Ecies.decrypt("encrypted:not base64!!", &key).unwrap_err();
        assert!(matches!(err, Error::Cipher(CipherError::InvalidPayload(_))));
    }

    #[test]
    fn test_decrypt_truncated_payload_fails() {
        let (key, public) = keypair();
        let sealed = seal(&public, "secret");
        let raw = STANDARD.decode(strip_sentinel(&sealed)).unwrap();
        let truncated = format!("encrypted:{}", STANDARD.encode(&raw[..raw.len() - 4]));

        assert!(Ecies.decrypt(&truncated, &key).is_err());
    }

    #[test]
    fn test_decrypt_bad_key_fails_before_payload() {
        let key = PrivateKey::new("zz", "test");

        let err = Ecies.decrypt("encrypted:AAAA", &key).unwrap_err();
        assert!(matches!(err, Error::Cipher(CipherError::InvalidPrivateKey(_))));
    }

    #[test]
    fn test_decrypt_convenience() {
        let (key, public) = keypair();
        assert_eq!(crate::core::cipher::decrypt(&key, &seal(&public, "x")).unwrap(), "x");
        assert_eq!(Ecies.name(), "ecies");
    }
}
