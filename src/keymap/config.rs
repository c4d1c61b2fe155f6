//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding structs.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::binding::Keybinding;
use super::command::Command;
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub when: Option<Vec<String>>,
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;

    parse_keymap_yaml(&content)
}

/// Parse keybindings from YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let current_platform = current_platform();
    let mut bindings = Vec::with_capacity(config.bindings.len());

    for entry in config.bindings {
        if let Some(ref platform) = entry.platform {
            if platform != current_platform {
                continue;
            }
        }

        let keystroke = parse_key_string(&entry.key)?;
        let command = parse_command(&entry.command)?;

        let mut binding = Keybinding::new(keystroke, command);
        if let Some(conditions) = parse_conditions(entry.when.as_deref())? {
            binding = binding.when(conditions);
        }
        bindings.push(binding);
    }

    Ok(bindings)
}

/// Parse a key string like "ctrl+enter" or "cmd+shift+z" into a Keystroke
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let invalid = |why: &str| KeymapError::InvalidKey(format!("{}: {}", why, key_str));
    let mut mods = Modifiers::NONE;
    let mut key = None;

    for part in key_str.split('+').map(str::trim) {
        if part.is_empty() {
            return Err(invalid("Empty segment"));
        }
        if let Some(m) = Modifiers::from_name(&part.to_lowercase()) {
            mods = mods | m;
            continue;
        }
        if key.is_some() {
            return Err(invalid("Multiple keys in binding"));
        }
        key = Some(KeyCode::from_name(part).ok_or_else(|| invalid("Unknown key"))?);
    }

    let key = key.ok_or_else(|| invalid("No key found in binding"))?;
    Ok(Keystroke::new(key, mods))
}

fn parse_command(cmd: &str) -> Result<Command, KeymapError> {
    Command::from_str(cmd).map_err(|_| KeymapError::InvalidCommand(cmd.to_string()))
}

fn parse_conditions(when: Option<&[String]>) -> Result<Option<Vec<Condition>>, KeymapError> {
    let Some(conditions) = when else {
        return Ok(None);
    };

    conditions
        .iter()
        .map(|c| parse_condition(c))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Parse a single condition string
pub fn parse_condition(cond: &str) -> Result<Condition, KeymapError> {
    match cond.to_lowercase().as_str() {
        "multiline" | "multi_line" | "paragraph" => Ok(Condition::Multiline),
        "single_line" | "singleline" => Ok(Condition::SingleLine),
        "auto_submit" | "autosubmit" => Ok(Condition::AutoSubmit),
        "auto_cancel" | "autocancel" => Ok(Condition::AutoCancel),
        "has_selection" | "hasselection" | "selection" => Ok(Condition::HasSelection),
        "no_selection" | "noselection" => Ok(Condition::NoSelection),
        _ => Err(KeymapError::InvalidCondition(cond.to_string())),
    }
}

fn current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}

/// Errors that can occur when parsing keymaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidCommand(String),
    InvalidCondition(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidCommand(c) => write!(f, "Invalid command: {}", c),
            KeymapError::InvalidCondition(c) => write!(f, "Invalid condition: {}", c),
        }
    }
}

impl std::error::Error for KeymapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let stroke = parse_key_string("a").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('a'));
        assert!(stroke.mods.is_empty());
    }

    #[test]
    fn test_parse_ctrl_enter() {
        let stroke = parse_key_string("ctrl+enter").unwrap();
        assert_eq!(stroke, Keystroke::ctrl_enter());
    }

    #[test]
    fn test_parse_key_with_multiple_modifiers() {
        let stroke = parse_key_string("ctrl+shift+z").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('z'));
        assert!(stroke.mods.ctrl());
        assert!(stroke.mods.shift());
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key_string("esc").unwrap().key, KeyCode::Escape);
        assert_eq!(parse_key_string("ArrowLeft").unwrap().key, KeyCode::Left);
        assert_eq!(parse_key_string("f5").unwrap().key, KeyCode::F(5));
    }

    #[test]
    fn test_parse_invalid_keys() {
        assert!(matches!(
            parse_key_string("ctrl+"),
            Err(KeymapError::InvalidKey(_))
        ));
        assert!(matches!(
            parse_key_string("ctrl+shift"),
            Err(KeymapError::InvalidKey(_))
        ));
        assert!(matches!(
            parse_key_string("a+b"),
            Err(KeymapError::InvalidKey(_))
        ));
        assert!(matches!(
            parse_key_string("f13"),
            Err(KeymapError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_parse_yaml_with_conditions() {
        let yaml = r#"
bindings:
  - key: "ctrl+enter"
    command: Submit
    when: ["multiline", "auto_submit"]
  - key: "escape"
    command: Cancel
"#;
        let bindings = parse_keymap_yaml(yaml).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].command, Command::Submit);
        assert_eq!(
            bindings[0].when,
            Some(vec![Condition::Multiline, Condition::AutoSubmit])
        );
        assert!(bindings[1].when.is_none());
    }

    #[test]
    fn test_parse_yaml_skips_other_platforms() {
        let yaml = r#"
bindings:
  - key: "f1"
    command: Undo
    platform: "not-a-platform"
"#;
        assert!(parse_keymap_yaml(yaml).unwrap().is_empty());
    }

    #[test]
    fn test_parse_yaml_errors() {
        assert!(matches!(
            parse_keymap_yaml("bindings: 12"),
            Err(KeymapError::ParseError(_))
        ));
        assert!(matches!(
            parse_keymap_yaml("bindings:\n  - key: a\n    command: Launch\n"),
            Err(KeymapError::InvalidCommand(c)) if c == "Launch"
        ));
        assert!(matches!(
            parse_keymap_yaml("bindings:\n  - key: a\n    command: Undo\n    when: [sideways]\n"),
            Err(KeymapError::InvalidCondition(_))
        ));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            KeymapError::InvalidKey("x+y".into()).to_string(),
            "Invalid key: x+y"
        );
    }
}
