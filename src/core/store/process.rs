//! Environment variable fallback.

use super::{KeySource, Lookup};
use crate::core::domain::PrivateKey;

/// Reads `DOTENV_PRIVATE_KEY[_<PROFILE>]` from the environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessVars;

impl KeySource for ProcessVars {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn find(&self, lookup: &Lookup<'_>) -> Option<PrivateKey> {
        lookup
            .vars
            .var(&lookup.name)
            .filter(|hex| !hex.is_empty())
            .map(|hex| PrivateKey::new(hex, self.name()))
    }
}
