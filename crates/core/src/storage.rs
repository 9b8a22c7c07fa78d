//! Load and save of the JSON-backed command store.
//!
//! The store is a single JSON object mapping command names to entries. It is
//! loaded fresh at the start of every invocation and written back in full
//! after a mutation. There is no locking: two concurrent writers race and the
//! last writer wins, which is acceptable for a single-user local tool.

use std::fs::{self, File};
use std::path::Path;

use log::warn;

use crate::command_entry::{CommandEntry, CommandMap};
use crate::error::{Error, Result};

/// Loads the saved commands from the storage file.
///
/// Ensures the parent directory exists and creates an empty store (`{}`) if
/// the file is absent. A storage file that exists but holds malformed JSON is
/// tolerated: a warning is logged and an empty map is returned, so a
/// corrupted store never prevents the tool from starting.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created, or if an
/// existing file cannot be read.
pub fn load_commands(storage_path: &str) -> Result<CommandMap> {
    let path = Path::new(storage_path);

    // parent() is empty for a bare file name, which create_dir_all rejects
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| Error::io_error("storage".to_string(), storage_path.to_string(), e))?;
    }

    if !path.exists() {
        fs::write(path, "{}")
            .map_err(|e| Error::io_error("storage".to_string(), storage_path.to_string(), e))?;
        return Ok(CommandMap::new());
    }

    let data = fs::read_to_string(path)
        .map_err(|e| Error::io_error("storage".to_string(), storage_path.to_string(), e))?;

    match serde_json::from_str(&data) {
        Ok(commands) => Ok(commands),
        Err(e) => {
            warn!("Ignoring malformed storage file at `{storage_path}`: {e}");
            Ok(CommandMap::new())
        }
    }
}

/// Writes the full command map to the storage file, replacing its contents.
///
/// The map is serialized as two-space indented JSON. The write is a plain
/// overwrite with no atomic rename.
///
/// # Errors
///
/// Returns an error if the file cannot be created or if serialization fails.
pub fn save_commands(storage_path: &str, commands: &CommandMap) -> Result<()> {
    let f = File::create(storage_path)
        .map_err(|e| Error::io_error("storage".to_string(), storage_path.to_string(), e))?;

    serde_json::to_writer_pretty(f, commands).map_err(|e| {
        Error::json_error(
            "writing".to_string(),
            "storage".to_string(),
            storage_path.to_string(),
            e,
        )
    })
}

/// Looks up a command entry by name.
///
/// # Errors
///
/// Returns [`Error::CommandNotFound`] if no entry is saved under `name`.
pub fn get_command<'a>(commands: &'a CommandMap, name: &str) -> Result<&'a CommandEntry> {
    commands
        .get(name)
        .ok_or_else(|| Error::CommandNotFound(name.to_string()))
}
