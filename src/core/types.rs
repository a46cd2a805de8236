//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A hex-encoded compressed secp256k1 public key, as written to
/// `DOTENV_PUBLIC_KEY*`.
///
/// Used only as a hint for the global key store lookup.
pub type PublicKey = String;
