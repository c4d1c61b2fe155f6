//! Configurable keyboard mapping for edit mode
//!
//! This module provides a data-driven keybinding system that:
//! - Maps keystrokes to field commands (submit, cancel, caret and draft edits)
//! - Makes bindings conditional on the field (paragraph or single line,
//!   auto-submit and auto-cancel switches)
//! - Supports platform-specific modifier handling (Cmd on macOS, Ctrl elsewhere)
//! - Enables user customization via YAML config files
//!
//! # Architecture
//!
//! ```text
//! DOM keyCode → Keystroke → Keymap::lookup(ctx) → Command → Msg
//! ```
//!
//! # Loading Keymaps
//!
//! ```
//! use easy_edit::keymap::{default_bindings, KeyContext, Keymap, Keystroke, Command};
//!
//! let keymap = Keymap::with_bindings(default_bindings());
//! let cmd = keymap.lookup(&Keystroke::ctrl_enter(), Some(&KeyContext::paragraph()));
//! assert_eq!(cmd, Some(Command::Submit));
//! ```

mod binding;
mod command;
mod config;
mod context;
mod defaults;
mod dom_adapter;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext};
pub use defaults::{default_bindings, default_keymap_yaml, load_default_keymap, merge_bindings};
pub use dom_adapter::keystroke_from_dom;
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
