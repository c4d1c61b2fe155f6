//! Widget model - the complete state of one inline field
//!
//! Mutated only by `update::update`; rendered by `view::render`.

use std::fmt;
use std::rc::Rc;

use crate::editable::{EditableState, RopeBuffer, StringBuffer, TextEditMsg};
use crate::field::{FieldKind, FieldValue};
use crate::keymap::{default_bindings, KeyContext, Keymap};
use crate::props::EasyEditProps;

/// Which view the field shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Viewing,
    Editing,
}

/// Host predicate deciding whether a draft may be committed
pub type Validator = Rc<dyn Fn(&FieldValue) -> bool>;

/// The in-progress value while editing
#[derive(Debug, Clone)]
pub enum Draft {
    /// Single-line text kinds
    Line(EditableState<StringBuffer>),
    /// Textarea
    Paragraph(EditableState<RopeBuffer>),
    /// Select, radio and checkbox groups
    Choice(FieldValue),
}

impl Draft {
    pub fn for_value(kind: FieldKind, value: &FieldValue) -> Self {
        if kind.is_multiline() {
            Draft::Paragraph(EditableState::new(
                RopeBuffer::from_text(&value.as_text()),
                kind.constraints(),
            ))
        } else if kind.is_textual() {
            Draft::Line(EditableState::new(
                StringBuffer::from_text(&value.as_text()),
                kind.constraints(),
            ))
        } else {
            Draft::Choice(value.clone().normalized_for(kind))
        }
    }

    /// Current draft as a field value shaped for `kind`
    pub fn value(&self, kind: FieldKind) -> FieldValue {
        match self {
            Draft::Line(state) => FieldValue::Text(state.text()),
            Draft::Paragraph(state) => FieldValue::Text(state.text()),
            Draft::Choice(value) => value.clone().normalized_for(kind),
        }
    }

    /// Discard edits and history, starting over from `value`
    pub fn reset(&mut self, value: &FieldValue) {
        match self {
            Draft::Line(state) => state.reset(&value.as_text()),
            Draft::Paragraph(state) => state.reset(&value.as_text()),
            Draft::Choice(current) => *current = value.clone(),
        }
    }

    /// Replace the draft as a single undoable step. Returns true if it changed.
    pub fn replace(&mut self, value: &FieldValue) -> bool {
        match self {
            Draft::Line(state) => state.set_text(&value.as_text()),
            Draft::Paragraph(state) => state.set_text(&value.as_text()),
            Draft::Choice(current) => {
                if current == value {
                    false
                } else {
                    *current = value.clone();
                    true
                }
            }
        }
    }

    /// Apply a text edit. Choice drafts have no caret and ignore it.
    pub fn apply(&mut self, msg: &TextEditMsg) -> bool {
        match self {
            Draft::Line(state) => state.apply(msg),
            Draft::Paragraph(state) => state.apply(msg),
            Draft::Choice(_) => false,
        }
    }

    /// Caret offset, if the draft is text
    pub fn caret(&self) -> Option<usize> {
        match self {
            Draft::Line(state) => Some(state.caret()),
            Draft::Paragraph(state) => Some(state.caret()),
            Draft::Choice(_) => None,
        }
    }

    pub fn has_selection(&self) -> bool {
        match self {
            Draft::Line(state) => state.has_selection(),
            Draft::Paragraph(state) => state.has_selection(),
            Draft::Choice(_) => false,
        }
    }
}

/// State of one inline field
pub struct EasyEditModel {
    pub props: EasyEditProps,
    pub view: ViewState,
    /// Last accepted value; what the display view shows
    pub committed: FieldValue,
    pub draft: Draft,
    pub is_hovering: bool,
    /// False after the validator rejected a commit, until the next edit
    pub is_valid: bool,
    pub keymap: Keymap,
    validator: Option<Validator>,
}

impl EasyEditModel {
    /// Create a model with the default keymap
    pub fn new(props: EasyEditProps) -> Self {
        Self::with_keymap(props, Keymap::with_bindings(default_bindings()))
    }

    pub fn with_keymap(props: EasyEditProps, keymap: Keymap) -> Self {
        let committed = props.value.clone().normalized_for(props.kind);
        let view = if props.edit_mode {
            ViewState::Editing
        } else {
            ViewState::Viewing
        };
        Self {
            draft: Draft::for_value(props.kind, &committed),
            view,
            committed,
            props,
            is_hovering: false,
            is_valid: true,
            keymap,
            validator: None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.props.kind
    }

    pub fn is_editing(&self) -> bool {
        self.view == ViewState::Editing
    }

    pub fn draft_value(&self) -> FieldValue {
        self.draft.value(self.props.kind)
    }

    /// Context for conditional keybindings
    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            has_selection: self.draft.has_selection(),
            ..KeyContext::for_props(&self.props)
        }
    }

    pub fn set_validator(&mut self, validator: impl Fn(&FieldValue) -> bool + 'static) {
        self.validator = Some(Rc::new(validator));
    }

    pub fn clear_validator(&mut self) {
        self.validator = None;
    }

    /// Ask the validator about `value`; no validator accepts everything
    pub fn validate(&self, value: &FieldValue) -> bool {
        self.validator.as_ref().map_or(true, |v| v(value))
    }
}

impl fmt::Debug for EasyEditModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EasyEditModel")
            .field("kind", &self.props.kind)
            .field("view", &self.view)
            .field("committed", &self.committed)
            .field("draft", &self.draft_value())
            .field("is_hovering", &self.is_hovering)
            .field("is_valid", &self.is_valid)
            .field("has_validator", &self.validator.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_viewing_with_committed_draft() {
        let model = EasyEditModel::new(EasyEditProps::textarea().with_value("abc"));
        assert_eq!(model.view, ViewState::Viewing);
        assert_eq!(model.committed, FieldValue::from("abc"));
        assert_eq!(model.draft_value(), FieldValue::from("abc"));
        assert!(matches!(model.draft, Draft::Paragraph(_)));
    }

    #[test]
    fn test_edit_mode_prop_starts_editing() {
        let model = EasyEditModel::new(EasyEditProps::new(FieldKind::Text).in_edit_mode());
        assert!(model.is_editing());
        assert!(matches!(model.draft, Draft::Line(_)));
    }

    #[test]
    fn test_checkbox_draft_is_choice_list() {
        let props = EasyEditProps::new(FieldKind::Checkbox).with_value("a");
        let model = EasyEditModel::new(props);
        assert_eq!(model.draft_value(), FieldValue::Many(vec!["a".to_string()]));
    }

    #[test]
    fn test_key_context_tracks_props() {
        let model = EasyEditModel::new(EasyEditProps::textarea().disable_auto_submit());
        let ctx = model.key_context();
        assert!(ctx.multiline);
        assert!(!ctx.auto_submit);
        assert!(ctx.auto_cancel);
        assert!(!ctx.has_selection);
    }

    #[test]
    fn test_validator() {
        let mut model = EasyEditModel::new(EasyEditProps::default());
        assert!(model.validate(&FieldValue::from("")));
        model.set_validator(|v| !v.is_empty());
        assert!(!model.validate(&FieldValue::from("")));
        assert!(model.validate(&FieldValue::from("x")));
        model.clear_validator();
        assert!(model.validate(&FieldValue::from("")));
    }

    #[test]
    fn test_draft_replace_and_reset() {
        let mut draft = Draft::for_value(FieldKind::Text, &"a".into());
        assert!(draft.replace(&"ab".into()));
        assert!(!draft.replace(&"ab".into()));
        assert!(draft.apply(&TextEditMsg::Undo));
        assert_eq!(draft.value(FieldKind::Text), FieldValue::from("a"));
        draft.reset(&"z".into());
        assert!(!draft.apply(&TextEditMsg::Undo));
        assert_eq!(draft.caret(), Some(1));
    }
}
