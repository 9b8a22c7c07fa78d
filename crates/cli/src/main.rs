use std::process::ExitCode;

use clap::Parser;
use log::debug;
use term_cli::cli_args::{Args, TermCommand};
use term_cli::handlers;
use term_cli_core::error::Result;
use term_cli_core::{config, storage};

fn execute() -> Result<()> {
    let args = Args::parse();

    let storage_path = config::get_storage_path(&args.storage_path);
    debug!("Storage path: `{storage_path}`");

    let mut commands = storage::load_commands(&storage_path)?;

    match args.command {
        TermCommand::Save {
            name,
            command,
            description,
            tags,
        } => handlers::save_command(
            &storage_path,
            &mut commands,
            &name,
            &command,
            description,
            tags,
        ),
        TermCommand::List => {
            handlers::list_commands(&commands);
            Ok(())
        }
        TermCommand::Run {
            name,
            arguments,
            dry_run,
        } => handlers::run_command(&commands, &name, &arguments, dry_run),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
