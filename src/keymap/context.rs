//! Context system for conditional keybindings
//!
//! The same key does different things depending on the field: Enter submits a
//! single-line input but inserts a newline in a paragraph, and the
//! auto-submit/auto-cancel flags switch keyboard commit and discard off.

use serde::Deserialize;

use crate::props::EasyEditProps;

/// Field state a binding's conditions are evaluated against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// The field is a paragraph
    pub multiline: bool,
    /// Keyboard commit is enabled
    pub auto_submit: bool,
    /// Keyboard discard is enabled
    pub auto_cancel: bool,
    /// The draft has a non-empty selection
    pub has_selection: bool,
}

impl KeyContext {
    /// Context for a field configured by `props`
    pub fn for_props(props: &EasyEditProps) -> Self {
        Self {
            multiline: props.kind.is_multiline(),
            auto_submit: !props.disable_auto_submit,
            auto_cancel: !props.disable_auto_cancel,
            has_selection: false,
        }
    }

    pub fn single_line() -> Self {
        Self {
            multiline: false,
            auto_submit: true,
            auto_cancel: true,
            has_selection: false,
        }
    }

    pub fn paragraph() -> Self {
        Self {
            multiline: true,
            ..Self::single_line()
        }
    }
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Multiline,
    SingleLine,
    AutoSubmit,
    AutoCancel,
    HasSelection,
    NoSelection,
}

impl Condition {
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::Multiline => ctx.multiline,
            Condition::SingleLine => !ctx.multiline,
            Condition::AutoSubmit => ctx.auto_submit,
            Condition::AutoCancel => ctx.auto_cancel,
            Condition::HasSelection => ctx.has_selection,
            Condition::NoSelection => !ctx.has_selection,
        }
    }

    /// Evaluate all conditions (AND logic)
    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}
