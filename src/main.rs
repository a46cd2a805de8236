//! dotenvx - Decrypt .env files and inject them into commands.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dotenvx::cli::output;
use dotenvx::cli::{execute, Cli};
use dotenvx::core::constants::LOG_VAR;
use dotenvx::error::{CipherError, Error, KeyError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("dotenvx=debug")
        } else {
            EnvFilter::new("dotenvx=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Key(KeyError::NotFound { name }) => Some(format!(
                "add {} to .env.keys or export it in your shell",
                name
            )),
            Error::Cipher(CipherError::DecryptionFailed(_)) => {
                Some("check that the private key matches DOTENV_PUBLIC_KEY".to_string())
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
