//! Term CLI Core Library
//!
//! This crate provides the core functionality for term-cli, a small tool for
//! saving frequently used terminal commands and running them later with
//! positional placeholder substitution.
//!
//! # Key Features
//!
//! - **Command Entries**: A JSON-backed map of named command templates
//! - **Placeholder Expansion**: Positional `{}` substitution at run time
//! - **Command Execution**: Whitespace splitting and subprocess spawning with
//!   inherited standard streams
//! - **Storage Management**: Load/save of the backing JSON file, created on
//!   first use
//! - **Error Handling**: Error types for all failure modes
//!
//! # Examples
//!
//! Loading the saved commands from the storage file:
//!
//! ```no_run
//! use term_cli_core::{config, storage};
//!
//! let storage_path = config::get_storage_path(&None);
//! let commands = storage::load_commands(&storage_path)?;
//! for (name, entry) in &commands {
//!     println!("{name}: {}", entry.command);
//! }
//! # Ok::<(), term_cli_core::error::Error>(())
//! ```

pub mod command_entry;
pub mod config;
pub mod error;
pub mod execution;
pub mod interpolation;
pub mod storage;
