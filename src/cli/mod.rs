//! Command-line interface.

pub mod completions;
pub mod get;
pub mod output;
pub mod run;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::core::config::Config;
use crate::core::constants::ENV_FILE;
use crate::core::domain::{Env, Profile};
use crate::core::loader::Loader;
use crate::core::sink::ProcessEnv;
use crate::error::Result;

/// dotenvx - Load .env files with encrypted values.
#[derive(Parser)]
#[command(
    name = "dotenvx",
    about = "Decrypt .env files and inject them into commands",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run a command with decrypted values injected as env vars
    Run {
        #[command(flatten)]
        source: SourceArgs,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Print a decrypted value, or all of them
    Get {
        /// Variable name; omit to print everything
        key: Option<String>,
        #[command(flatten)]
        source: SourceArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by commands that read a dotenv file.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the dotenv file
    #[arg(short = 'f', long = "env-file", default_value = ENV_FILE)]
    pub env_file: PathBuf,

    /// Profile selecting DOTENV_PRIVATE_KEY_<PROFILE> (inferred when omitted)
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Skip the global key store lookup
    #[arg(long)]
    pub no_global_store: bool,

    /// Path to the global key store
    #[arg(long)]
    pub keystore: Option<PathBuf>,
}

impl SourceArgs {
    /// Environment overrides first, then flags.
    fn config(&self) -> Config {
        let mut config = Config::from_env(&ProcessEnv);
        if self.no_global_store {
            config = config.without_global_store();
        }
        if let Some(path) = &self.keystore {
            config = config.with_global_store_path(path);
        }
        config
    }

    /// Parse and decrypt the selected file.
    pub fn decrypt(&self) -> Result<Env> {
        let loader = Loader::new(self.config());
        decrypt_with(&loader, &self.env_file, self.profile.as_deref())
    }
}

fn decrypt_with(loader: &Loader, path: &Path, profile: Option<&str>) -> Result<Env> {
    match profile {
        Some(profile) => {
            let env = Env::load(path)?;
            loader.decrypt(&Profile::new(profile), env, &ProcessEnv)
        }
        None => Ok(loader.decrypt_file(path, &ProcessEnv)?.1),
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    use Command::*;

    match command {
        Run { source, command } => run::execute(&source, &command),
        Get { key, source, json } => get::execute(&source, key.as_deref(), json),
        Completions { shell } => completions::execute(shell),
    }
}
