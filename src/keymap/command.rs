//! Command enum representing every action a key can trigger
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to at most one `Msg` for the update loop.

use std::str::FromStr;

use crate::editable::{MoveTarget, TextEditMsg};
use crate::messages::Msg;

/// All actions that can be bound to keys while a field is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Commit / discard
    // ========================================================================
    /// Commit the draft (auto-submit)
    Submit,
    /// Discard the draft (auto-cancel)
    Cancel,

    // ========================================================================
    // Draft editing
    // ========================================================================
    InsertNewline,
    DeleteBackward,
    DeleteForward,
    Undo,
    Redo,
    SelectAll,

    // ========================================================================
    // Caret movement
    // ========================================================================
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorUp,
    MoveCursorDown,
    MoveCursorLineStart,
    MoveCursorLineEnd,
    MoveCursorDocumentStart,
    MoveCursorDocumentEnd,

    MoveCursorLeftWithSelection,
    MoveCursorRightWithSelection,
    MoveCursorUpWithSelection,
    MoveCursorDownWithSelection,
    MoveCursorLineStartWithSelection,
    MoveCursorLineEndWithSelection,

    /// Removes a default binding when used in a user keymap
    Unbound,
}

impl Command {
    /// Convert to the message the update loop understands
    pub fn to_msg(self) -> Option<Msg> {
        let edit = |m: TextEditMsg| Some(Msg::Edit(m));
        let mv = |t: MoveTarget| Some(Msg::Edit(TextEditMsg::Move(t)));
        let sel = |t: MoveTarget| Some(Msg::Edit(TextEditMsg::MoveWithSelection(t)));

        match self {
            Command::Submit => Some(Msg::Save),
            Command::Cancel => Some(Msg::Cancel),

            Command::InsertNewline => edit(TextEditMsg::InsertNewline),
            Command::DeleteBackward => edit(TextEditMsg::DeleteBackward),
            Command::DeleteForward => edit(TextEditMsg::DeleteForward),
            Command::Undo => edit(TextEditMsg::Undo),
            Command::Redo => edit(TextEditMsg::Redo),
            Command::SelectAll => edit(TextEditMsg::SelectAll),

            Command::MoveCursorLeft => mv(MoveTarget::Left),
            Command::MoveCursorRight => mv(MoveTarget::Right),
            Command::MoveCursorUp => mv(MoveTarget::Up),
            Command::MoveCursorDown => mv(MoveTarget::Down),
            Command::MoveCursorLineStart => mv(MoveTarget::LineStart),
            Command::MoveCursorLineEnd => mv(MoveTarget::LineEnd),
            Command::MoveCursorDocumentStart => mv(MoveTarget::DocumentStart),
            Command::MoveCursorDocumentEnd => mv(MoveTarget::DocumentEnd),

            Command::MoveCursorLeftWithSelection => sel(MoveTarget::Left),
            Command::MoveCursorRightWithSelection => sel(MoveTarget::Right),
            Command::MoveCursorUpWithSelection => sel(MoveTarget::Up),
            Command::MoveCursorDownWithSelection => sel(MoveTarget::Down),
            Command::MoveCursorLineStartWithSelection => sel(MoveTarget::LineStart),
            Command::MoveCursorLineEndWithSelection => sel(MoveTarget::LineEnd),

            Command::Unbound => None,
        }
    }

    /// Commands that end edit mode
    pub fn exits_edit_mode(self) -> bool {
        matches!(self, Command::Submit | Command::Cancel)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Command::Submit => "Save",
            Command::Cancel => "Cancel",
            Command::InsertNewline => "New Line",
            Command::DeleteBackward => "Delete Backward",
            Command::DeleteForward => "Delete Forward",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::SelectAll => "Select All",
            Command::MoveCursorLeft | Command::MoveCursorLeftWithSelection => "Left",
            Command::MoveCursorRight | Command::MoveCursorRightWithSelection => "Right",
            Command::MoveCursorUp | Command::MoveCursorUpWithSelection => "Up",
            Command::MoveCursorDown | Command::MoveCursorDownWithSelection => "Down",
            Command::MoveCursorLineStart | Command::MoveCursorLineStartWithSelection => {
                "Line Start"
            }
            Command::MoveCursorLineEnd | Command::MoveCursorLineEndWithSelection => "Line End",
            Command::MoveCursorDocumentStart => "Start",
            Command::MoveCursorDocumentEnd => "End",
            Command::Unbound => "Unbound",
        }
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Submit" | "Save" => Ok(Command::Submit),
            "Cancel" => Ok(Command::Cancel),

            "InsertNewline" => Ok(Command::InsertNewline),
            "DeleteBackward" => Ok(Command::DeleteBackward),
            "DeleteForward" => Ok(Command::DeleteForward),
            "Undo" => Ok(Command::Undo),
            "Redo" => Ok(Command::Redo),
            "SelectAll" => Ok(Command::SelectAll),

            "MoveCursorLeft" => Ok(Command::MoveCursorLeft),
            "MoveCursorRight" => Ok(Command::MoveCursorRight),
            "MoveCursorUp" => Ok(Command::MoveCursorUp),
            "MoveCursorDown" => Ok(Command::MoveCursorDown),
            "MoveCursorLineStart" => Ok(Command::MoveCursorLineStart),
            "MoveCursorLineEnd" => Ok(Command::MoveCursorLineEnd),
            "MoveCursorDocumentStart" => Ok(Command::MoveCursorDocumentStart),
            "MoveCursorDocumentEnd" => Ok(Command::MoveCursorDocumentEnd),

            "MoveCursorLeftWithSelection" => Ok(Command::MoveCursorLeftWithSelection),
            "MoveCursorRightWithSelection" => Ok(Command::MoveCursorRightWithSelection),
            "MoveCursorUpWithSelection" => Ok(Command::MoveCursorUpWithSelection),
            "MoveCursorDownWithSelection" => Ok(Command::MoveCursorDownWithSelection),
            "MoveCursorLineStartWithSelection" => Ok(Command::MoveCursorLineStartWithSelection),
            "MoveCursorLineEndWithSelection" => Ok(Command::MoveCursorLineEndWithSelection),

            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}
