//! Subcommand implementations for save, list and run.

use itertools::Itertools;
use log::debug;
use term_cli_core::command_entry::{CommandEntry, CommandMap};
use term_cli_core::error::Result;
use term_cli_core::{execution, interpolation, storage};

/// Saves a command template under a name, overwriting any existing entry,
/// and writes the store back to disk.
///
/// The command words are joined with single spaces to form the template.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn save_command(
    storage_path: &str,
    commands: &mut CommandMap,
    name: &str,
    command_words: &[String],
    description: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    let entry = CommandEntry {
        command: command_words.join(" "),
        description,
        tags,
    };

    commands.insert(name.to_string(), entry);
    storage::save_commands(storage_path, commands)?;

    println!("Saved: {name}");
    Ok(())
}

/// Renders one listing row per saved command, sorted by name.
pub fn render_command_rows(commands: &CommandMap) -> Vec<String> {
    commands
        .iter()
        .sorted_by(|a, b| a.0.cmp(b.0))
        .map(|(name, entry)| format!("{name}: {entry}"))
        .collect()
}

/// Prints every saved command, one row per entry.
pub fn list_commands(commands: &CommandMap) {
    for row in render_command_rows(commands) {
        println!("{row}");
    }
}

/// Runs a saved command with positional placeholder substitution.
///
/// An unknown name, an empty expanded command line, and a subprocess that
/// fails to spawn or exits non-zero are all reported on stderr and swallowed,
/// so the process still exits zero. Only fatal storage errors propagate.
///
/// # Errors
///
/// Returns an error only for fatal storage failures.
pub fn run_command(
    commands: &CommandMap,
    name: &str,
    arguments: &[String],
    dry_run: bool,
) -> Result<()> {
    match expand_and_execute(commands, name, arguments, dry_run) {
        Ok(()) => Ok(()),
        Err(e) if !e.is_fatal() => {
            eprintln!("{e}");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn expand_and_execute(
    commands: &CommandMap,
    name: &str,
    arguments: &[String],
    dry_run: bool,
) -> Result<()> {
    let entry = storage::get_command(commands, name)?;

    let expanded = interpolation::expand_placeholders(&entry.command, arguments);
    debug!("Expanded `{name}` to `{expanded}`");

    println!("Running: {expanded}");

    let (program, program_arguments) = execution::split_command_line(&expanded)?;

    if dry_run {
        println!("Dry run is specified, exiting without executing.");
        return Ok(());
    }

    execution::execute_command(&program, &program_arguments)
}
