//! Splitting an expanded command line and spawning the subprocess.

use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Splits an expanded command line into a program name and its arguments.
///
/// The line is split on whitespace runs; the first token is the program.
/// There is no quoting or escaping support, so a program path or argument
/// containing spaces cannot be represented.
///
/// # Errors
///
/// Returns [`Error::EmptyCommand`] if the line contains no tokens.
pub fn split_command_line(expanded: &str) -> Result<(String, Vec<String>)> {
    let mut tokens = expanded.split_whitespace();

    let Some(program) = tokens.next() else {
        return Err(Error::EmptyCommand(expanded.to_string()));
    };

    Ok((
        program.to_string(),
        tokens.map(ToString::to_string).collect(),
    ))
}

/// Spawns the program with its arguments and waits for it to finish.
///
/// The child's standard streams are inherited from the invoking process, so
/// input and output flow straight through to the controlling terminal. The
/// call blocks until the child exits; there is no timeout.
///
/// # Errors
///
/// Returns an error if the child cannot be spawned or exits with a
/// non-success code.
pub fn execute_command(program: &str, arguments: &[String]) -> Result<()> {
    debug!("Spawning `{program}` with arguments {arguments:?}");

    let subprocess_exit_success = Command::new(program)
        .args(arguments)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?
        .wait()?
        .success();

    if subprocess_exit_success {
        Ok(())
    } else {
        Err(Error::SubProcessExit)
    }
}
