//! Run command.
//!
//! Executes a command with decrypted values injected as environment variables.

use crate::cli::SourceArgs;
use crate::error::{Error, Result};

/// Run a command with decrypted values as environment variables.
pub fn execute(source: &SourceArgs, command: &[String]) -> Result<()> {
    let exit_code = run_with_env(source, command)?;
    std::process::exit(exit_code);
}

fn run_with_env(source: &SourceArgs, command: &[String]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Other("no command specified".to_string()))?;

    let env = source.decrypt()?;

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);

    // Loaded values override inherited ones
    for (key, value) in env.iter() {
        cmd.env(key, value);
    }

    tracing::debug!(program = %program, vars = env.len(), "spawning");

    let status = cmd.status()?;
    Ok(status.code().unwrap_or(1))
}
