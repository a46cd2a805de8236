//! Get command.
//!
//! Prints decrypted values: one by name, or the whole file as dotenv text
//! or JSON.

use crate::cli::SourceArgs;
use crate::core::domain::Env;
use crate::error::{Error, Result};

/// Print one decrypted value or the full mapping.
pub fn execute(source: &SourceArgs, key: Option<&str>, json: bool) -> Result<()> {
    let env = source.decrypt()?;

    match key {
        Some(key) => {
            let value = env.get(key).ok_or_else(|| {
                Error::Other(format!(
                    "{} is not set in {}",
                    key,
                    source.env_file.display()
                ))
            })?;

            if json {
                println!("{}", Env::from_pairs([(key, value)]).to_json());
            } else {
                println!("{}", value);
            }
        }
        None if json => {
            let output = serde_json::to_string_pretty(&env.to_json())
                .map_err(|e| Error::Other(format!("failed to serialize JSON: {}", e)))?;
            println!("{}", output);
        }
        None => print!("{}", env),
    }

    Ok(())
}
