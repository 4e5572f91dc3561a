//! The command data model and the fixed built-in command list.

use serde::{Deserialize, Serialize};

/// Where a command came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    /// Hardcoded into the catalog, never discovered from disk
    Builtin,
    /// Derived from a Markdown file under a commands root directory
    Custom,
}

/// A single entry in the command catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Command name, always beginning with `/`
    pub name: String,
    /// Origin of the command
    #[serde(rename = "type")]
    pub command_type: CommandType,
    /// Human-readable description, present only for built-in commands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Command {
    /// Create a built-in command with a description
    pub fn builtin(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            command_type: CommandType::Builtin,
            description: Some(description.to_string()),
        }
    }

    /// Create a custom command discovered from disk
    pub fn custom(name: String) -> Self {
        Self {
            name,
            command_type: CommandType::Custom,
            description: None,
        }
    }
}

/// The fixed, ordered list of built-in commands.
///
/// Built-ins always appear first in the catalog, in this order, regardless
/// of filesystem state.
pub fn builtin_commands() -> Vec<Command> {
    vec![
        Command::builtin("/add-dir", "Add a new working directory"),
        Command::builtin("/clear", "Clear conversation history and free up context"),
        Command::builtin(
            "/compact",
            "Clear conversation history but keep a summary in context",
        ),
        Command::builtin(
            "/init",
            "Initialize a new CLAUDE.md file with codebase documentation",
        ),
        Command::builtin("/model", "Set the AI model for Claude Code"),
        Command::builtin("/permissions", "Manage allow & deny tool permission rules"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_commands_fixed_and_deterministic() {
        let first = builtin_commands();
        let second = builtin_commands();
        assert_eq!(first, second);

        let names: Vec<&str> = first.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "/add-dir",
                "/clear",
                "/compact",
                "/init",
                "/model",
                "/permissions"
            ]
        );

        for command in &first {
            assert_eq!(command.command_type, CommandType::Builtin);
            assert!(command.description.is_some());
        }
    }

    #[test]
    fn test_builtin_serialization_shape() {
        let command = Command::builtin("/add-dir", "Add a new working directory");
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "/add-dir",
                "type": "builtin",
                "description": "Add a new working directory"
            })
        );
    }

    #[test]
    fn test_custom_serialization_omits_description() {
        let command = Command::custom("/sub/deploy".to_string());
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "/sub/deploy",
                "type": "custom"
            })
        );
    }

    #[test]
    fn test_command_type_round_trip() {
        let command: Command =
            serde_json::from_str(r#"{"name": "/foo", "type": "custom"}"#).unwrap();
        assert_eq!(command.command_type, CommandType::Custom);
        assert_eq!(command.description, None);
    }
}
