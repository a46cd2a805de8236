//! Error types.
//!
//! Each concern gets its own error enum; [`Error`] wraps them so library
//! functions can return a single [`Result`] and propagate with `?`.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error returned by every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Failures reading or parsing dotenv text.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed line {content:?} (error at position {index})")]
    Line { content: String, index: usize },

    #[error("parse error: {0}")]
    Other(String),
}

impl From<dotenvy::Error> for ParseError {
    fn from(err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::LineParse(content, index) => Self::Line { content, index },
            other => Self::Other(other.to_string()),
        }
    }
}

/// Private key resolution failures.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("private key not found: set {name} or add it to .env.keys")]
    NotFound { name: String },
}

/// Decryption failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid encrypted payload: {0}")]
    InvalidPayload(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),
}

/// Global key store read failures.
///
/// These never abort a load; the resolver logs them and moves on.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("key store {} is unreadable: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("key store {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Whether the store simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Unreadable { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
