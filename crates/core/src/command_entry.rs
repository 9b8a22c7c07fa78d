use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The full set of saved commands, keyed by name. Names are case-sensitive
/// and unique by map construction. Insertion order is preserved across a
/// save/load round-trip; no operation relies on it.
pub type CommandMap = IndexMap<String, CommandEntry>;

/// One saved command template.
///
/// The `command` string may contain any number of literal `{}` placeholder
/// tokens, substituted positionally at run time. `description` and `tags`
/// are informational only and are omitted from storage when empty.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub command: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl CommandEntry {
    pub fn new(command: String) -> Self {
        Self {
            command,
            description: None,
            tags: Vec::new(),
        }
    }
}

impl Display for CommandEntry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(description) => {
                write!(formatter, "{} ({})", self.command, description)
            }
            None => formatter.write_str(self.command.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_has_no_metadata() {
        let entry = CommandEntry::new("echo hello {}".to_string());
        assert_eq!(entry.command, "echo hello {}");
        assert!(entry.description.is_none());
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn test_display_without_description() {
        let entry = CommandEntry::new("ls -la".to_string());
        assert_eq!(entry.to_string(), "ls -la");
    }

    #[test]
    fn test_display_with_description() {
        let mut entry = CommandEntry::new("ls -la".to_string());
        entry.description = Some("long listing".to_string());
        assert_eq!(entry.to_string(), "ls -la (long listing)");
    }

    #[test]
    fn test_bare_entry_serializes_to_command_only() {
        let entry = CommandEntry::new("echo hello {}".to_string());
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"command":"echo hello {}"}"#);
    }

    #[test]
    fn test_entry_deserializes_without_optional_fields() {
        let entry: CommandEntry = serde_json::from_str(r#"{"command":"pwd"}"#).unwrap();
        assert_eq!(entry, CommandEntry::new("pwd".to_string()));
    }
}
