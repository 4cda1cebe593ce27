//! Run command implementation

use std::process::Command;

use runfiles::Runfiles;

use crate::error::{CliError, Result};

/// Run a runfile executable and return its exit code.
///
/// The child inherits this process's environment with the runfiles
/// variables applied on top, so it discovers the same runfiles.
pub fn run_program(runfiles: &Runfiles, logical: &str, args: &[String]) -> Result<i32> {
    let program = runfiles.path(logical)?;
    tracing::debug!(program = %program.display(), ?args, "Running runfile");

    let mut command = Command::new(&program);
    command.args(args);
    runfiles.configure_command(&mut command);

    let status = command.status().map_err(|e| {
        CliError::user(format!("failed to run {}: {e}", program.display()))
    })?;

    match status.code() {
        Some(code) => Ok(code),
        None => Err(CliError::user(format!(
            "{} was terminated by a signal",
            program.display()
        ))),
    }
}
