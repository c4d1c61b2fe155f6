//! Message types for draft editing.

/// Target for caret movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    DocumentStart,
    DocumentEnd,
}

/// Editing operations a draft understands.
#[derive(Debug, Clone, PartialEq)]
pub enum TextEditMsg {
    /// Move caret without affecting selection
    Move(MoveTarget),
    /// Move caret and extend selection
    MoveWithSelection(MoveTarget),

    InsertChar(char),
    /// Insert a string (paste, IME commit)
    InsertText(String),
    /// Insert a newline (paragraphs only)
    InsertNewline,

    /// Backspace
    DeleteBackward,
    /// Delete
    DeleteForward,

    SelectAll,

    Undo,
    Redo,
}

impl TextEditMsg {
    /// Can this message change the draft's text (as opposed to the caret)?
    pub fn mutates_text(&self) -> bool {
        matches!(
            self,
            TextEditMsg::InsertChar(_)
                | TextEditMsg::InsertText(_)
                | TextEditMsg::InsertNewline
                | TextEditMsg::DeleteBackward
                | TextEditMsg::DeleteForward
                | TextEditMsg::Undo
                | TextEditMsg::Redo
        )
    }

    /// Check if this message only makes sense in a paragraph
    pub fn requires_multiline(&self) -> bool {
        matches!(
            self,
            TextEditMsg::InsertNewline
                | TextEditMsg::Move(MoveTarget::Up)
                | TextEditMsg::Move(MoveTarget::Down)
                | TextEditMsg::MoveWithSelection(MoveTarget::Up)
                | TextEditMsg::MoveWithSelection(MoveTarget::Down)
        )
    }
}
