//! EditableState - a draft with a caret, a selection and undo history.

use super::buffer::{TextBuffer, TextBufferMut};
use super::constraints::EditConstraints;
use super::history::{EditHistory, EditOperation};
use super::messages::{MoveTarget, TextEditMsg};
use super::selection::Selection;

/// Draft text being edited in place.
///
/// Generic over the buffer type B (StringBuffer for single-line inputs,
/// RopeBuffer for paragraphs).
#[derive(Debug, Clone)]
pub struct EditableState<B: TextBuffer> {
    pub buffer: B,
    pub constraints: EditConstraints,
    selection: Selection,
    /// Column to aim for when moving vertically through shorter lines
    desired_column: Option<usize>,
    history: EditHistory,
}

impl<B: TextBuffer> EditableState<B> {
    /// Create a draft with the caret placed after the existing text
    pub fn new(buffer: B, constraints: EditConstraints) -> Self {
        let end = buffer.len_chars();
        Self {
            buffer,
            constraints,
            selection: Selection::collapsed(end),
            desired_column: None,
            history: EditHistory::new(),
        }
    }

    pub fn text(&self) -> String {
        self.buffer.content()
    }

    /// Caret offset in characters
    pub fn caret(&self) -> usize {
        self.selection.head
    }

    /// Caret as (line, column)
    pub fn caret_position(&self) -> (usize, usize) {
        self.buffer.offset_to_position(self.selection.head)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn selected_text(&self) -> String {
        if self.selection.is_empty() {
            return String::new();
        }
        self.buffer.slice(self.selection.range())
    }

    pub fn can_undo(&self) -> bool {
        self.constraints.enable_undo && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.constraints.enable_undo && self.history.can_redo()
    }

    fn place_caret(&mut self, offset: usize, extend_selection: bool) {
        let offset = offset.min(self.buffer.len_chars());
        if extend_selection {
            self.selection.head = offset;
        } else {
            self.selection = Selection::collapsed(offset);
        }
    }
}

// =============================================================================
// Movement
// =============================================================================

impl<B: TextBuffer> EditableState<B> {
    pub fn move_caret(&mut self, target: MoveTarget, extend_selection: bool) {
        if !self.constraints.allow_multiline
            && matches!(target, MoveTarget::Up | MoveTarget::Down)
        {
            return;
        }

        // Collapsing a selection with Left/Right lands on its edge
        if !extend_selection && self.has_selection() {
            match target {
                MoveTarget::Left => {
                    let start = self.selection.start();
                    self.place_caret(start, false);
                    self.desired_column = None;
                    return;
                }
                MoveTarget::Right => {
                    let end = self.selection.end();
                    self.place_caret(end, false);
                    self.desired_column = None;
                    return;
                }
                _ => {}
            }
        }

        let head = self.selection.head;
        let (line, column) = self.buffer.offset_to_position(head);

        let target_offset = match target {
            MoveTarget::Left => head.saturating_sub(1),
            MoveTarget::Right => head + 1,
            MoveTarget::LineStart => self.buffer.line_to_offset(line),
            MoveTarget::LineEnd => self.buffer.line_to_offset(line) + self.buffer.line_length(line),
            MoveTarget::DocumentStart => 0,
            MoveTarget::DocumentEnd => self.buffer.len_chars(),
            MoveTarget::Up | MoveTarget::Down => {
                let desired = *self.desired_column.get_or_insert(column);
                let next_line = if target == MoveTarget::Up {
                    if line == 0 {
                        self.place_caret(0, extend_selection);
                        return;
                    }
                    line - 1
                } else {
                    if line + 1 >= self.buffer.line_count() {
                        let end = self.buffer.len_chars();
                        self.place_caret(end, extend_selection);
                        return;
                    }
                    line + 1
                };
                let col = desired.min(self.buffer.line_length(next_line));
                self.place_caret(self.buffer.line_to_offset(next_line) + col, extend_selection);
                return;
            }
        };

        self.desired_column = None;
        self.place_caret(target_offset, extend_selection);
    }

    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.buffer.len_chars());
        self.desired_column = None;
    }
}

// =============================================================================
// Editing (require TextBufferMut)
// =============================================================================

impl<B: TextBuffer + TextBufferMut> EditableState<B> {
    /// Apply an editing message. Returns true if the draft text changed.
    pub fn apply(&mut self, msg: &TextEditMsg) -> bool {
        match msg {
            TextEditMsg::Move(target) => {
                self.move_caret(*target, false);
                false
            }
            TextEditMsg::MoveWithSelection(target) => {
                self.move_caret(*target, true);
                false
            }
            TextEditMsg::InsertChar(ch) => self.insert_char(*ch),
            TextEditMsg::InsertText(text) => self.insert_text(text),
            TextEditMsg::InsertNewline => self.insert_newline(),
            TextEditMsg::DeleteBackward => self.delete_backward(),
            TextEditMsg::DeleteForward => self.delete_forward(),
            TextEditMsg::SelectAll => {
                self.select_all();
                false
            }
            TextEditMsg::Undo => self.undo(),
            TextEditMsg::Redo => self.redo(),
        }
    }

    /// Replace `range` with `text`, record it, and put the caret after it
    fn edit(&mut self, range: std::ops::Range<usize>, text: &str) -> bool {
        let deleted = self.buffer.slice(range.clone());
        if deleted.is_empty() && text.is_empty() {
            return false;
        }

        let caret_before = self.selection.head;
        self.buffer.replace(range.clone(), text);
        let caret_after = range.start + text.chars().count();
        self.selection = Selection::collapsed(caret_after);
        self.desired_column = None;

        if self.constraints.enable_undo {
            let op = match (deleted.is_empty(), text.is_empty()) {
                (true, _) => {
                    EditOperation::insert(range.start, text.to_string(), caret_before, caret_after)
                }
                (false, true) => EditOperation::delete(range.start, deleted, caret_before, caret_after),
                (false, false) => EditOperation::replace(
                    range.start,
                    deleted,
                    text.to_string(),
                    caret_before,
                    caret_after,
                ),
            };
            self.history.push(op);
        }

        true
    }

    /// Insert a character, replacing any selection.
    /// Returns false if the constraints reject it.
    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut buf))
    }

    /// Insert text, replacing any selection.
    /// Returns false if any character is rejected or the length cap would be exceeded.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        if !text.chars().all(|ch| self.constraints.is_char_allowed(ch)) {
            return false;
        }

        let remaining = self.buffer.len_chars() - self.selection.len();
        if self
            .constraints
            .would_exceed_max_length(remaining, text.chars().count())
        {
            return false;
        }

        let range = self.selection.range();
        self.edit(range, text)
    }

    pub fn insert_newline(&mut self) -> bool {
        if !self.constraints.allow_multiline {
            return false;
        }
        self.insert_char('\n')
    }

    /// Backspace
    pub fn delete_backward(&mut self) -> bool {
        if self.has_selection() {
            let range = self.selection.range();
            return self.edit(range, "");
        }
        let head = self.selection.head;
        if head == 0 {
            return false;
        }
        self.edit(head - 1..head, "")
    }

    /// Delete
    pub fn delete_forward(&mut self) -> bool {
        if self.has_selection() {
            let range = self.selection.range();
            return self.edit(range, "");
        }
        let head = self.selection.head;
        if head >= self.buffer.len_chars() {
            return false;
        }
        self.edit(head..head + 1, "")
    }

    /// Replace the whole draft (a host change event).
    ///
    /// Host-supplied values bypass the character filter. Returns false if the
    /// text is unchanged.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.buffer.content() == text {
            return false;
        }
        let len = self.buffer.len_chars();
        self.edit(0..len, text)
    }

    /// Reset the draft without recording history (entering edit mode, cancel)
    pub fn reset(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.history.clear();
        self.desired_column = None;
        self.selection = Selection::collapsed(self.buffer.len_chars());
    }

    pub fn undo(&mut self) -> bool {
        if !self.constraints.enable_undo {
            return false;
        }
        let Some(op) = self.history.pop_undo() else {
            return false;
        };
        self.buffer.replace(op.inserted_range(), &op.deleted_text);
        self.selection = Selection::collapsed(op.caret_before);
        self.desired_column = None;
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.constraints.enable_undo {
            return false;
        }
        let Some(op) = self.history.pop_redo() else {
            return false;
        };
        self.buffer.replace(op.deleted_range(), &op.inserted_text);
        self.selection = Selection::collapsed(op.caret_after);
        self.desired_column = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{RopeBuffer, StringBuffer};

    fn line(text: &str) -> EditableState<StringBuffer> {
        EditableState::new(StringBuffer::from_text(text), EditConstraints::single_line())
    }

    fn paragraph(text: &str) -> EditableState<RopeBuffer> {
        EditableState::new(RopeBuffer::from_text(text), EditConstraints::paragraph())
    }

    #[test]
    fn test_new_places_caret_at_end() {
        let state = line("hello");
        assert_eq!(state.caret(), 5);
        assert!(!state.has_selection());
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut state = line("abc");
        assert!(state.insert_char('d'));
        assert_eq!(state.text(), "abcd");
        assert!(state.delete_backward());
        assert!(state.delete_backward());
        assert_eq!(state.text(), "ab");
    }

    #[test]
    fn test_single_line_rejects_newline() {
        let mut state = line("abc");
        assert!(!state.insert_newline());
        assert!(!state.insert_text("a\nb"));
        assert_eq!(state.text(), "abc");
    }

    #[test]
    fn test_paragraph_newline() {
        let mut state = paragraph("first");
        assert!(state.insert_newline());
        state.insert_text("second");
        assert_eq!(state.text(), "first\nsecond");
        assert_eq!(state.caret_position(), (1, 6));
    }

    #[test]
    fn test_typing_replaces_selection() {
        let mut state = line("hello world");
        state.select_all();
        assert_eq!(state.selected_text(), "hello world");
        state.insert_char('x');
        assert_eq!(state.text(), "x");
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut state = line("abc");
        assert!(!state.delete_forward());
        state.move_caret(MoveTarget::LineStart, false);
        assert!(state.delete_forward());
        assert_eq!(state.text(), "bc");
    }

    #[test]
    fn test_vertical_movement_keeps_desired_column() {
        let mut state = paragraph("long line\nab\nanother");
        state.move_caret(MoveTarget::DocumentStart, false);
        for _ in 0..6 {
            state.move_caret(MoveTarget::Right, false);
        }
        state.move_caret(MoveTarget::Down, false);
        assert_eq!(state.caret_position(), (1, 2));
        state.move_caret(MoveTarget::Down, false);
        assert_eq!(state.caret_position(), (2, 6));
    }

    #[test]
    fn test_vertical_movement_ignored_in_single_line() {
        let mut state = line("abc");
        state.move_caret(MoveTarget::Up, false);
        assert_eq!(state.caret(), 3);
    }

    #[test]
    fn test_extend_selection_then_collapse_left() {
        let mut state = line("hello");
        state.move_caret(MoveTarget::Left, true);
        state.move_caret(MoveTarget::Left, true);
        assert_eq!(state.selected_text(), "lo");
        state.move_caret(MoveTarget::Left, false);
        assert_eq!(state.caret(), 3);
        assert!(!state.has_selection());
    }

    #[test]
    fn test_undo_redo() {
        let mut state = line("");
        state.insert_char('a');
        state.insert_char('b');
        assert!(state.undo());
        assert_eq!(state.text(), "a");
        assert!(state.redo());
        assert_eq!(state.text(), "ab");
        assert!(!state.redo());
    }

    #[test]
    fn test_set_text_is_undoable() {
        let mut state = paragraph("old");
        assert!(state.set_text("new value"));
        assert!(!state.set_text("new value"));
        assert!(state.undo());
        assert_eq!(state.text(), "old");
    }

    #[test]
    fn test_reset_clears_history() {
        let mut state = line("abc");
        state.insert_char('d');
        state.reset("xyz");
        assert_eq!(state.text(), "xyz");
        assert!(!state.can_undo());
        assert_eq!(state.caret(), 3);
    }

    #[test]
    fn test_numeric_filter_and_max_length() {
        let mut state = EditableState::new(
            StringBuffer::new(),
            EditConstraints::numeric().with_max_length(3),
        );
        assert!(state.insert_char('1'));
        assert!(!state.insert_char('x'));
        assert!(state.insert_text("23"));
        assert!(!state.insert_char('4'));
        assert_eq!(state.text(), "123");
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut state = line("ab");
        assert!(!state.apply(&TextEditMsg::Move(MoveTarget::Left)));
        assert!(state.apply(&TextEditMsg::InsertChar('X')));
        assert_eq!(state.text(), "aXb");
        assert!(!state.apply(&TextEditMsg::SelectAll));
        assert!(state.apply(&TextEditMsg::DeleteBackward));
        assert_eq!(state.text(), "");
    }
}
