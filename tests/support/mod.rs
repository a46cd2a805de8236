//! Test support utilities for dotenvx integration tests.
//!
//! Provides isolated project/home directories, throwaway keypairs and
//! helpers to write dotenv fixtures.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

use dotenvx::Config;

/// Test environment with isolated temp directories.
///
/// No process-global state is mutated: the loader is pointed at the temp
/// dirs through `Config`, and child commands use `.current_dir()` and a
/// private HOME.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
    /// Project keypair
    pub keys: Keypair,
}

impl Test {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
            home: TempDir::new().expect("failed to create temp home"),
            keys: Keypair::generate(),
        }
    }

    /// Path inside the project directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file in the project directory
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, contents).expect("failed to write fixture");
        path
    }

    /// Write `.env.keys` with the given variables
    pub fn write_keys(&self, vars: &[(&str, &str)]) -> PathBuf {
        self.write(".env.keys", &dotenv_text(vars))
    }

    /// Path of the global key store under the temp home
    pub fn store_path(&self) -> PathBuf {
        self.home.path().join(".dotenvx").join(".env.keys.json")
    }

    /// Write the global key store with one entry per keypair
    pub fn write_store(&self, pairs: &[&Keypair]) {
        let entries = pairs
            .iter()
            .map(|k| {
                (
                    k.public.clone(),
                    serde_json::json!({
                        "public_key": k.public,
                        "private_key": k.private,
                        "group": null,
                        "name": null,
                        "profile": "",
                        "comment": null,
                        "timestamp": null,
                    }),
                )
            })
            .collect::<serde_json::Map<_, _>>();

        let path = self.store_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::Value::Object(entries).to_string()).unwrap();
    }

    /// Loader configuration scoped to this test's directories
    pub fn config(&self) -> Config {
        Config::new()
            .with_global_store_path(self.store_path())
            .with_search_from(self.dir.path())
    }

    /// Configuration searching for `.env.keys` from a nested directory
    pub fn config_from(&self, dir: &Path) -> Config {
        self.config().with_search_from(dir)
    }

    /// A dotenvx command with HOME and the working directory isolated.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("dotenvx").expect("failed to find dotenvx binary");
        cmd.env("HOME", self.home.path());
        cmd.env("NO_COLOR", "1");
        for var in [
            "APP_ENV",
            "NODE_ENV",
            "DOTENVX_KEYSTORE",
            "DOTENVX_NO_GLOBAL_STORE",
            "DOTENVX_LOG",
        ] {
            cmd.env_remove(var);
        }
        // Covers DOTENV_PRIVATE_KEY and every DOTENV_PRIVATE_KEY_<PROFILE>
        for (var, _) in std::env::vars_os() {
            if var.to_string_lossy().starts_with("DOTENV_PRIVATE_KEY") {
                cmd.env_remove(var);
            }
        }
        cmd.current_dir(self.dir.path());
        cmd
    }
}

/// Render variables as dotenv text
pub fn dotenv_text(vars: &[(&str, &str)]) -> String {
    vars.iter()
        .map(|(k, v)| format!("{}=\"{}\"\n", k, v))
        .collect()
}
