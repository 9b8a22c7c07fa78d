//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure for the `term`
//! binary using the `clap` crate.

use clap::{Parser, Subcommand};

/// Command-line arguments for the term CLI tool.
#[derive(Parser, Debug)]
#[command(
    name = "term",
    about = "Save, manage, and run your frequently used terminal commands easily."
)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the JSON file that stores saved commands.
    ///
    /// If not provided, defaults to `~/.term-cli/commands.json`.
    #[arg(long, short = 's', global = true)]
    pub storage_path: Option<String>,

    #[command(subcommand)]
    pub command: TermCommand,
}

#[derive(Subcommand, Debug)]
pub enum TermCommand {
    /// Save a new command
    Save {
        /// Name to save the command under. Overwrites an existing entry.
        name: String,

        /// The command words, joined with single spaces to form the template.
        ///
        /// May contain `{}` placeholder tokens, substituted positionally by
        /// `run`. Everything after the name is captured verbatim, so the
        /// template may itself contain flags (e.g. `term save ll ls -la`).
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,

        /// Optional description shown by `list`. Must precede the name.
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Informational tag, repeatable. Must precede the name.
        #[arg(long = "tag", short = 't', action = clap::ArgAction::Append)]
        tags: Vec<String>,
    },

    /// List saved commands
    List,

    /// Run a saved command with arguments
    Run {
        /// Name of the saved command to run.
        name: String,

        /// Positional values substituted for `{}` placeholders in order.
        ///
        /// Excess values are dropped; excess placeholders stay verbatim.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        arguments: Vec<String>,

        /// Print the expanded command without executing it. Must precede the name.
        #[arg(long, short = 'd', action)]
        dry_run: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_save_joinable_command_words() {
        let args = Args::parse_from(["term", "save", "greet", "echo", "hello", "{}"]);

        match args.command {
            TermCommand::Save {
                name,
                command,
                description,
                tags,
            } => {
                assert_eq!(name, "greet");
                assert_eq!(command, vec!["echo", "hello", "{}"]);
                assert!(description.is_none());
                assert!(tags.is_empty());
            }
            _ => panic!("Expected Save subcommand"),
        }
    }

    #[test]
    fn test_save_requires_command_words() {
        let result = Args::try_parse_from(["term", "save", "greet"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_captures_hyphenated_template_words() {
        let args = Args::parse_from(["term", "save", "ll", "ls", "-la"]);

        match args.command {
            TermCommand::Save { command, .. } => {
                assert_eq!(command, vec!["ls", "-la"]);
            }
            _ => panic!("Expected Save subcommand"),
        }
    }

    #[test]
    fn test_save_with_metadata_flags() {
        let args = Args::parse_from([
            "term", "save", "-d", "greeting", "-t", "demo", "-t", "fun", "greet", "echo", "hi",
        ]);

        match args.command {
            TermCommand::Save {
                description, tags, ..
            } => {
                assert_eq!(description, Some("greeting".to_string()));
                assert_eq!(tags, vec!["demo", "fun"]);
            }
            _ => panic!("Expected Save subcommand"),
        }
    }

    #[test]
    fn test_list_takes_no_arguments() {
        let args = Args::parse_from(["term", "list"]);
        assert!(matches!(args.command, TermCommand::List));
        assert!(args.storage_path.is_none());
    }

    #[test]
    fn test_run_with_positional_arguments() {
        let args = Args::parse_from(["term", "run", "greet", "world", "again"]);

        match args.command {
            TermCommand::Run {
                name,
                arguments,
                dry_run,
            } => {
                assert_eq!(name, "greet");
                assert_eq!(arguments, vec!["world", "again"]);
                assert!(!dry_run);
            }
            _ => panic!("Expected Run subcommand"),
        }
    }

    #[test]
    fn test_run_requires_a_name() {
        let result = Args::try_parse_from(["term", "run"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_dry_run_flag() {
        let args = Args::parse_from(["term", "run", "--dry-run", "greet"]);

        match args.command {
            TermCommand::Run {
                dry_run, arguments, ..
            } => {
                assert!(dry_run);
                assert!(arguments.is_empty());
            }
            _ => panic!("Expected Run subcommand"),
        }
    }

    #[test]
    fn test_global_storage_path() {
        let args = Args::parse_from(["term", "list", "-s", "/tmp/commands.json"]);
        assert_eq!(args.storage_path, Some("/tmp/commands.json".to_string()));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        let result = Args::try_parse_from(["term", "frobnicate"]);
        assert!(result.is_err());
    }
}
