//! Term CLI Library
//!
//! This crate provides the command-line interface for term-cli, a small tool
//! for saving frequently used terminal commands and running them later with
//! positional placeholder substitution.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing with `clap`
//! - [`handlers`]: The save/list/run subcommand implementations
//!
//! # Examples
//!
//! The CLI binary (`term`) supports three subcommands:
//!
//! ```bash
//! # Save a command template under a name
//! term save greet echo hello {}
//!
//! # List all saved commands
//! term list
//!
//! # Run a saved command, substituting {} placeholders in order
//! term run greet world
//! ```

pub mod cli_args;
pub mod handlers;
