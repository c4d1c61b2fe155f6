//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::context::{Condition, KeyContext};
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Indices into `bindings`; several bindings may share a keystroke
    /// with different conditions
    lookup: HashMap<Keystroke, Vec<usize>>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.lookup.entry(binding.keystroke).or_default().push(idx);
        self.bindings.push(binding);
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Find the command bound to a keystroke
    ///
    /// Conditional bindings whose conditions hold win over unconditional
    /// ones; within each group the first registered binding wins. With no
    /// context, conditional bindings are skipped.
    pub fn lookup(&self, keystroke: &Keystroke, context: Option<&KeyContext>) -> Option<Command> {
        let indices = self.lookup.get(keystroke)?;

        let conditional = indices.iter().map(|&i| &self.bindings[i]).find(|b| {
            match (&b.when, context) {
                (Some(conditions), Some(ctx)) => Condition::evaluate_all(conditions, ctx),
                _ => false,
            }
        });

        let binding = conditional.or_else(|| {
            indices
                .iter()
                .map(|&i| &self.bindings[i])
                .find(|b| b.when.is_none())
        })?;

        if binding.command == Command::Unbound {
            None
        } else {
            Some(binding.command)
        }
    }

    /// Keystrokes bound to a command (for help text)
    pub fn keystrokes_for(&self, command: Command) -> Vec<Keystroke> {
        self.bindings
            .iter()
            .filter(|b| b.command == command)
            .map(|b| b.keystroke)
            .collect()
    }
}
