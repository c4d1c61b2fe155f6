//! Default keybindings for edit mode
//!
//! Loaded from the keymap.yaml embedded at compile time, falling back to
//! hardcoded defaults if that fails to parse.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::load_keymap_file;
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Embedded default keymap YAML (compiled into binary)
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

pub fn default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load the default keymap with user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap
/// 2. `override_path` if given, else the user keymap at
///    `~/.config/easy-edit/keymap.yaml`
///
/// User bindings with `command: Unbound` remove matching default bindings.
pub fn load_default_keymap(override_path: Option<&Path>) -> Vec<Keybinding> {
    let mut bindings = match super::config::parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::debug!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    let user_path = override_path
        .map(Path::to_path_buf)
        .or_else(crate::config_paths::keymap_file);

    if let Some(user_path) = user_path {
        if user_path.exists() {
            match load_keymap_file(&user_path) {
                Ok(user_bindings) => {
                    tracing::info!(
                        "Merging user keymap from {} ({} bindings)",
                        user_path.display(),
                        user_bindings.len()
                    );
                    bindings = merge_bindings(bindings, user_bindings);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to load user keymap from {}: {}",
                        user_path.display(),
                        e
                    );
                }
            }
        } else if override_path.is_some() {
            tracing::warn!("Keymap file {} does not exist", user_path.display());
        }
    }

    bindings
}

/// Merge user bindings into base bindings
///
/// - Same keystroke and conditions as a base binding: replaces it
/// - `Unbound`: removes every base binding for that keystroke
/// - Otherwise: appended
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        match result.iter().position(|b| user_binding.overrides(b)) {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded default bindings, mirroring the embedded keymap.yaml
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let cmd_shift = cmd | Modifiers::SHIFT;
    let none = Modifiers::NONE;
    let shift = Modifiers::SHIFT;
    let ctrl_shift = Modifiers::CTRL | Modifiers::SHIFT;

    vec![
        Keybinding::new(Keystroke::enter(), Command::Submit)
            .when(vec![Condition::SingleLine, Condition::AutoSubmit]),
        Keybinding::new(Keystroke::new(KeyCode::Enter, shift), Command::Submit)
            .when(vec![Condition::SingleLine, Condition::AutoSubmit]),
        Keybinding::new(Keystroke::ctrl_enter(), Command::Submit)
            .when_single(Condition::AutoSubmit),
        Keybinding::new(Keystroke::new(KeyCode::Enter, ctrl_shift), Command::Submit)
            .when_single(Condition::AutoSubmit),
        Keybinding::new(Keystroke::enter(), Command::InsertNewline)
            .when_single(Condition::Multiline),
        Keybinding::new(Keystroke::new(KeyCode::Enter, shift), Command::InsertNewline)
            .when_single(Condition::Multiline),
        Keybinding::new(Keystroke::escape(), Command::Cancel).when_single(Condition::AutoCancel),
        bind(KeyCode::Backspace, none, Command::DeleteBackward),
        bind(KeyCode::Delete, none, Command::DeleteForward),
        bind(KeyCode::Left, none, Command::MoveCursorLeft),
        bind(KeyCode::Right, none, Command::MoveCursorRight),
        bind(KeyCode::Up, none, Command::MoveCursorUp),
        bind(KeyCode::Down, none, Command::MoveCursorDown),
        bind(KeyCode::Home, none, Command::MoveCursorLineStart),
        bind(KeyCode::End, none, Command::MoveCursorLineEnd),
        bind(KeyCode::Home, Modifiers::CTRL, Command::MoveCursorDocumentStart),
        bind(KeyCode::End, Modifiers::CTRL, Command::MoveCursorDocumentEnd),
        bind(KeyCode::Left, shift, Command::MoveCursorLeftWithSelection),
        bind(KeyCode::Right, shift, Command::MoveCursorRightWithSelection),
        bind(KeyCode::Up, shift, Command::MoveCursorUpWithSelection),
        bind(KeyCode::Down, shift, Command::MoveCursorDownWithSelection),
        bind(KeyCode::Home, shift, Command::MoveCursorLineStartWithSelection),
        bind(KeyCode::End, shift, Command::MoveCursorLineEndWithSelection),
        bind(KeyCode::Char('a'), cmd, Command::SelectAll),
        bind(KeyCode::Char('z'), cmd, Command::Undo),
        bind(KeyCode::Char('z'), cmd_shift, Command::Redo),
        bind(KeyCode::Char('y'), cmd, Command::Redo),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
