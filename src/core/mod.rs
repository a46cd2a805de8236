//! Core library components.
//!
//! This module contains the reusable decrypt-and-load pipeline: value
//! classification, private key resolution, decryption and environment
//! merging.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod loader;
pub mod sink;
pub mod store;
pub mod types;
