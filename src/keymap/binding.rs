//! Keybinding struct representing a mapping from a keystroke to a command

use super::command::Command;
use super::context::Condition;
use super::types::Keystroke;

/// A single keybinding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
    /// Conditions that must all hold for this binding to activate
    pub when: Option<Vec<Condition>>,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self {
            keystroke,
            command,
            when: None,
        }
    }

    /// Add conditions to this binding (builder pattern)
    pub fn when(mut self, conditions: Vec<Condition>) -> Self {
        self.when = Some(conditions);
        self
    }

    pub fn when_single(self, condition: Condition) -> Self {
        self.when(vec![condition])
    }

    pub fn is_conditional(&self) -> bool {
        self.when.is_some()
    }

    /// Same keystroke and same conditions: a user binding replaces this one
    pub fn overrides(&self, other: &Keybinding) -> bool {
        self.keystroke == other.keystroke && self.when == other.when
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    #[test]
    fn test_conditional_binding() {
        let stroke = Keystroke::new(KeyCode::Enter, Modifiers::CTRL);
        let binding = Keybinding::new(stroke, Command::Submit)
            .when(vec![Condition::Multiline, Condition::AutoSubmit]);
        assert!(binding.is_conditional());
        assert_eq!(binding.keystroke, stroke);
    }

    #[test]
    fn test_overrides_needs_same_conditions() {
        let a = Keybinding::new(Keystroke::enter(), Command::Submit)
            .when_single(Condition::SingleLine);
        let b = Keybinding::new(Keystroke::enter(), Command::Unbound)
            .when_single(Condition::SingleLine);
        let c = Keybinding::new(Keystroke::enter(), Command::InsertNewline);
        assert!(b.overrides(&a));
        assert!(!c.overrides(&a));
    }
}
