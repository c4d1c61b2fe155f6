//! Draft edits: host change events, keystrokes and direct text edits

use crate::commands::Cmd;
use crate::editable::TextEditMsg;
use crate::field::FieldValue;
use crate::keymap::Keystroke;
use crate::model::EasyEditModel;

use super::update_inner;

/// Host change event: the control reports its whole new value
///
/// Emits exactly one `Cmd::Change` per event.
pub fn update_change(model: &mut EasyEditModel, value: FieldValue) -> Option<Cmd> {
    if !model.is_editing() {
        return None;
    }

    let value = value.normalized_for(model.kind());
    model.draft.replace(&value);
    model.is_valid = true;
    Some(Cmd::Change(model.draft_value()))
}

/// Key pressed in the control
///
/// Bound keys run their command; unbound printable keys type into text
/// drafts; everything else is ignored.
pub fn update_key_down(model: &mut EasyEditModel, keystroke: Keystroke) -> Option<Cmd> {
    if !model.is_editing() {
        return None;
    }

    let ctx = model.key_context();
    if let Some(command) = model.keymap.lookup(&keystroke, Some(&ctx)) {
        if command.exits_edit_mode() {
            tracing::debug!(%keystroke, "{} via keyboard", command.display_name());
        } else {
            tracing::trace!(%keystroke, ?command, "key bound");
        }
        return command.to_msg().and_then(|msg| update_inner(model, msg));
    }

    let ch = keystroke.typed_char()?;
    if !model.kind().is_textual() {
        return None;
    }
    update_edit(model, TextEditMsg::InsertChar(ch))
}

/// Apply a text edit to the draft
///
/// Emits `Cmd::Change` when the text changed and `Cmd::Redraw` for caret or
/// selection moves.
pub fn update_edit(model: &mut EasyEditModel, edit: TextEditMsg) -> Option<Cmd> {
    if !model.is_editing() {
        return None;
    }
    if edit.requires_multiline() && !model.kind().is_multiline() {
        return None;
    }
    if edit.mutates_text() && !model.kind().is_textual() {
        tracing::trace!(?edit, kind = %model.kind(), "text edit on choice field ignored");
        return None;
    }

    let caret_before = model.draft.caret();
    let had_selection = model.draft.has_selection();

    if model.draft.apply(&edit) {
        model.is_valid = true;
        return Some(Cmd::Change(model.draft_value()));
    }

    let moved =
        model.draft.caret() != caret_before || model.draft.has_selection() != had_selection;
    moved.then_some(Cmd::Redraw)
}
