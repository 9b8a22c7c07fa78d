//! Storage path resolution for term-cli.
//!
//! This module provides functions for resolving the storage file path and
//! expanding shell variables like `~` in paths.

/// Default path for the saved commands storage file
const DEFAULT_STORAGE_PATH: &str = "~/.term-cli/commands.json";

/// Resolves the storage file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// storage path. Shell expansions like `~` are resolved.
///
/// # Arguments
///
/// * `storage_path_arg` - Optional custom storage file path
///
/// # Returns
///
/// The resolved absolute path to the storage file
///
/// # Examples
///
/// ```
/// use term_cli_core::config::get_storage_path;
///
/// // Use default path
/// let default_path = get_storage_path(&None);
///
/// // Use custom path
/// let custom_path = get_storage_path(&Some("/path/to/commands.json".to_string()));
/// ```
pub fn get_storage_path(storage_path_arg: &Option<String>) -> String {
    let storage_path = match storage_path_arg {
        Some(storage_path) => storage_path,
        None => DEFAULT_STORAGE_PATH,
    };

    shellexpand::tilde(storage_path).to_string()
}
