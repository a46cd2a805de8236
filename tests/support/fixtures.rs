//! Test fixtures: keypairs and ciphertexts.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// A throwaway secp256k1 keypair, hex-encoded the way dotenvx stores it.
#[derive(Debug, Clone)]
pub struct Keypair {
    pub private: String,
    pub public: String,
}

impl Keypair {
    pub fn generate() -> Self {
        let (sk, pk) = ecies::utils::generate_keypair();
        Self {
            private: hex::encode(sk.serialize()),
            public: hex::encode(pk.serialize_compressed()),
        }
    }

    /// Encrypt `plaintext` as an `encrypted:` value for this keypair
    pub fn seal(&self, plaintext: &str) -> String {
        let public = hex::decode(&self.public).expect("valid public key hex");
        let ciphertext = ecies::encrypt(&public, plaintext.as_bytes()).expect("encryption failed");
        format!("encrypted:{}", STANDARD.encode(ciphertext))
    }
}

/// Plaintext values used across tests.
pub const STANDARD_SECRETS: &[(&str, &str)] = &[
    ("DATABASE_URL", "postgres://localhost/mydb"),
    ("API_KEY", "sk-test-12345"),
    ("S3_BUCKET", "my-app-bucket"),
];
