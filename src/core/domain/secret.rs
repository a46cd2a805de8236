//! Encrypted value classification.
//!
//! A value is ciphertext iff it starts with the literal `encrypted:` prefix;
//! everything else is plaintext and passes through verbatim.

use crate::core::constants::ENCRYPTED_PREFIX;

/// Whether a value carries the `encrypted:` sentinel.
pub fn is_encrypted(value: &str) -> bool {
    value.starts_with(ENCRYPTED_PREFIX)
}

/// Remove the `encrypted:` sentinel, if present.
///
/// Exactly the prefix is removed; no trimming. Values without the
/// prefix are returned unchanged.
pub fn strip_sentinel(value: &str) -> &str {
    value.strip_prefix(ENCRYPTED_PREFIX).unwrap_or(value)
}
