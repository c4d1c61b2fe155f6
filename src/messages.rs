//! Message types for the Elm-style architecture
//!
//! Every host event reaching an inline field is expressed as a `Msg`.

use crate::editable::TextEditMsg;
use crate::field::FieldValue;
use crate::keymap::Keystroke;
use crate::props::EasyEditProps;

/// Input events for `update`
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Click on the display view
    Click,
    /// Pointer entered the display view
    HoverIn,
    /// Pointer left the display view
    HoverOut,
    /// The input control gained focus
    Focus,
    /// The input control lost focus
    Blur,
    /// Host change event carrying the control's new value
    Change(FieldValue),
    /// Key pressed in the input control
    KeyDown(Keystroke),
    /// Direct draft edit (caret movement, deletion, undo, ...)
    Edit(TextEditMsg),
    /// Save button or keyboard submit
    Save,
    /// Cancel button or keyboard cancel
    Cancel,
    /// Delete button
    Delete,
    /// Parent re-rendered with new props
    SetProps(Box<EasyEditProps>),
}

impl Msg {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Msg::Click => "Click",
            Msg::HoverIn => "HoverIn",
            Msg::HoverOut => "HoverOut",
            Msg::Focus => "Focus",
            Msg::Blur => "Blur",
            Msg::Change(_) => "Change",
            Msg::KeyDown(_) => "KeyDown",
            Msg::Edit(_) => "Edit",
            Msg::Save => "Save",
            Msg::Cancel => "Cancel",
            Msg::Delete => "Delete",
            Msg::SetProps(_) => "SetProps",
        }
    }
}
