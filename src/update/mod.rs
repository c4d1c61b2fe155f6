//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod draft;
mod transitions;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::EasyEditModel;

#[cfg(debug_assertions)]
use crate::tracing::StateSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use draft::{update_change, update_edit, update_key_down};
pub use transitions::{
    update_blur, update_cancel, update_click, update_delete, update_focus, update_hover,
    update_props, update_save,
};

/// Main update function - dispatches to sub-handlers
///
/// Returns `None` when the message does not apply in the current state.
/// In debug builds, this wraps with tracing instrumentation.
#[inline]
pub fn update(model: &mut EasyEditModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
pub(crate) fn update_inner(model: &mut EasyEditModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Click => update_click(model),
        Msg::HoverIn => update_hover(model, true),
        Msg::HoverOut => update_hover(model, false),
        Msg::Focus => update_focus(model),
        Msg::Blur => update_blur(model),
        Msg::Change(value) => update_change(model, value),
        Msg::KeyDown(keystroke) => update_key_down(model, keystroke),
        Msg::Edit(edit) => update_edit(model, edit),
        Msg::Save => update_save(model),
        Msg::Cancel => update_cancel(model),
        Msg::Delete => update_delete(model),
        Msg::SetProps(props) => update_props(model, *props),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after state and logs the diff.
#[cfg(debug_assertions)]
fn update_traced(model: &mut EasyEditModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = StateSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = StateSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "state", %diff, "state changed");
    }
    if let Some(ref cmd) = result {
        debug!(target: "message", ?cmd, "emitted");
    }

    result
}

/// Display name for a message, including its payload
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Change(value) => format!("Change({:?})", value),
        Msg::KeyDown(keystroke) => format!("KeyDown({})", keystroke),
        Msg::Edit(edit) => format!("Edit({:?})", edit),
        Msg::SetProps(props) => format!("SetProps({})", props.kind),
        other => other.name().to_string(),
    }
}
