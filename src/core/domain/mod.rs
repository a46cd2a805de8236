//! Domain types.

mod env;
mod identity;
mod profile;
pub mod secret;

pub use env::Env;
pub use identity::PrivateKey;
pub use profile::Profile;
pub use secret::{is_encrypted, strip_sentinel};
