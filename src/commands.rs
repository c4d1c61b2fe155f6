//! Command types for the Elm-style architecture
//!
//! Commands are the effects of an update: host callbacks to invoke, or a
//! plain request to repaint.

use crate::field::FieldValue;

/// Effects produced by `update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Visible state changed but no callback fires (entering edit mode,
    /// caret movement, a rejected commit)
    Redraw,
    /// The draft changed (onChange)
    Change(FieldValue),
    /// The draft was committed (onSave)
    Save(FieldValue),
    /// The draft was discarded (onCancel)
    Cancel,
    /// The delete button was pressed (onDelete)
    Delete,
    /// The input gained focus (onFocus)
    Focus(FieldValue),
    /// The input lost focus (onBlur)
    Blur(FieldValue),
    /// Pointer entered the display view (onHoverIn)
    HoverIn,
    /// Pointer left the display view (onHoverOut)
    HoverOut,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a repaint
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Focus(_) | Cmd::Blur(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
            _ => true,
        }
    }

    /// Leaf commands in execution order, batches expanded
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }

    /// Name of the host callback this command invokes
    pub fn callback_name(&self) -> Option<&'static str> {
        match self {
            Cmd::Change(_) => Some("onChange"),
            Cmd::Save(_) => Some("onSave"),
            Cmd::Cancel => Some("onCancel"),
            Cmd::Delete => Some("onDelete"),
            Cmd::Focus(_) => Some("onFocus"),
            Cmd::Blur(_) => Some("onBlur"),
            Cmd::HoverIn => Some("onHoverIn"),
            Cmd::HoverOut => Some("onHoverOut"),
            Cmd::None | Cmd::Redraw | Cmd::Batch(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested_batches() {
        let cmd = Cmd::batch(vec![
            Cmd::Change("a".into()),
            Cmd::batch(vec![Cmd::None, Cmd::Save("a".into())]),
        ]);
        assert_eq!(
            cmd.flatten(),
            vec![Cmd::Change("a".into()), Cmd::Save("a".into())]
        );
    }

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(!Cmd::Focus("x".into()).needs_redraw());
        assert!(Cmd::Cancel.needs_redraw());
        assert!(Cmd::batch(vec![Cmd::Blur("x".into()), Cmd::Redraw]).needs_redraw());
    }

    #[test]
    fn test_callback_names() {
        assert_eq!(Cmd::Save("x".into()).callback_name(), Some("onSave"));
        assert_eq!(Cmd::HoverOut.callback_name(), Some("onHoverOut"));
        assert_eq!(Cmd::Redraw.callback_name(), None);
    }
}
