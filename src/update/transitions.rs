//! View-state transitions: entering and leaving edit mode, hover, focus, props

use crate::commands::Cmd;
use crate::model::{Draft, EasyEditModel, ViewState};
use crate::props::EasyEditProps;

/// Click on the display view enters edit mode with a fresh draft
pub fn update_click(model: &mut EasyEditModel) -> Option<Cmd> {
    if model.is_editing() {
        return None;
    }
    if !model.props.allow_edit {
        tracing::debug!("click ignored: editing not allowed");
        return None;
    }

    let committed = model.committed.clone();
    model.draft.reset(&committed);
    model.is_valid = true;
    model.view = ViewState::Editing;
    Some(Cmd::Redraw)
}

/// Commit the draft if the validator accepts it
pub fn update_save(model: &mut EasyEditModel) -> Option<Cmd> {
    if !model.is_editing() {
        return None;
    }

    let value = model.draft_value();
    if !model.validate(&value) {
        tracing::debug!(?value, "validator rejected draft");
        model.is_valid = false;
        return Some(Cmd::Redraw);
    }

    model.committed = value.clone();
    model.is_valid = true;
    model.view = ViewState::Viewing;
    Some(Cmd::Save(value))
}

/// Discard the draft
pub fn update_cancel(model: &mut EasyEditModel) -> Option<Cmd> {
    if !leave_editing(model) {
        return None;
    }
    Some(Cmd::Cancel)
}

/// Delete button: leave edit mode without committing
pub fn update_delete(model: &mut EasyEditModel) -> Option<Cmd> {
    if !leave_editing(model) {
        return None;
    }
    Some(Cmd::Delete)
}

/// Revert the draft and return to the display view
fn leave_editing(model: &mut EasyEditModel) -> bool {
    if !model.is_editing() {
        return false;
    }
    let committed = model.committed.clone();
    model.draft.reset(&committed);
    model.is_valid = true;
    model.view = ViewState::Viewing;
    true
}

pub fn update_hover(model: &mut EasyEditModel, hovering: bool) -> Option<Cmd> {
    model.is_hovering = hovering;
    Some(if hovering { Cmd::HoverIn } else { Cmd::HoverOut })
}

pub fn update_focus(model: &mut EasyEditModel) -> Option<Cmd> {
    model.is_editing().then(|| Cmd::Focus(model.draft_value()))
}

/// Focus left the control, optionally committing or discarding the draft
///
/// Setting both `save_on_blur` and `cancel_on_blur` is contradictory; the
/// blur is reported and the draft is left alone.
pub fn update_blur(model: &mut EasyEditModel) -> Option<Cmd> {
    if !model.is_editing() {
        return None;
    }

    let blur = Cmd::Blur(model.draft_value());
    let follow_up = match (model.props.save_on_blur, model.props.cancel_on_blur) {
        (true, true) => {
            tracing::warn!("save_on_blur and cancel_on_blur both set; ignoring both");
            None
        }
        (true, false) => update_save(model),
        (false, true) => update_cancel(model),
        (false, false) => None,
    };

    Some(match follow_up {
        Some(cmd) => Cmd::batch(vec![blur, cmd]),
        None => blur,
    })
}

/// Parent re-rendered with new props
///
/// A changed `value` (or field kind) replaces both the committed value and the
/// draft. A changed `edit_mode` moves the view to match.
pub fn update_props(model: &mut EasyEditModel, props: EasyEditProps) -> Option<Cmd> {
    let value_changed = props.value != model.props.value;
    let kind_changed = props.kind != model.props.kind;
    let edit_mode_changed = props.edit_mode != model.props.edit_mode;

    if value_changed || kind_changed {
        model.committed = props.value.clone().normalized_for(props.kind);
        model.draft = Draft::for_value(props.kind, &model.committed);
        model.is_valid = true;
        tracing::debug!(value = ?model.committed, "value prop changed");
    }

    if edit_mode_changed {
        model.view = if props.edit_mode {
            ViewState::Editing
        } else {
            ViewState::Viewing
        };
    }

    model.props = props;
    Some(Cmd::Redraw)
}
