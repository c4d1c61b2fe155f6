//! Undo/redo history for drafts.

use std::collections::VecDeque;

/// A single applied edit. Offsets are character offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOperation {
    /// Where the edit happened
    pub offset: usize,
    /// Text removed by the edit (empty for pure inserts)
    pub deleted_text: String,
    /// Text inserted by the edit (empty for pure deletes)
    pub inserted_text: String,
    /// Caret before the edit
    pub caret_before: usize,
    /// Caret after the edit
    pub caret_after: usize,
}

impl EditOperation {
    pub fn insert(offset: usize, text: String, caret_before: usize, caret_after: usize) -> Self {
        Self {
            offset,
            deleted_text: String::new(),
            inserted_text: text,
            caret_before,
            caret_after,
        }
    }

    pub fn delete(offset: usize, text: String, caret_before: usize, caret_after: usize) -> Self {
        Self {
            offset,
            deleted_text: text,
            inserted_text: String::new(),
            caret_before,
            caret_after,
        }
    }

    pub fn replace(
        offset: usize,
        deleted_text: String,
        inserted_text: String,
        caret_before: usize,
        caret_after: usize,
    ) -> Self {
        Self {
            offset,
            deleted_text,
            inserted_text,
            caret_before,
            caret_after,
        }
    }

    /// Character range the inserted text occupies after the edit
    pub fn inserted_range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.inserted_text.chars().count()
    }

    /// Character range the deleted text occupied before the edit
    pub fn deleted_range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.deleted_text.chars().count()
    }
}

/// Both stacks hold operations in their applied (forward) form.
/// Undo reverts the returned operation, redo re-applies it.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: VecDeque<EditOperation>,
    redo_stack: Vec<EditOperation>,
    max_size: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    pub fn new() -> Self {
        Self::with_max_size(200)
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Record a freshly applied operation (clears redo)
    pub fn push(&mut self, op: EditOperation) {
        self.redo_stack.clear();
        self.undo_stack.push_back(op);
        while self.undo_stack.len() > self.max_size {
            self.undo_stack.pop_front();
        }
    }

    pub fn pop_undo(&mut self) -> Option<EditOperation> {
        let op = self.undo_stack.pop_back()?;
        self.redo_stack.push(op.clone());
        Some(op)
    }

    pub fn pop_redo(&mut self) -> Option<EditOperation> {
        let op = self.redo_stack.pop()?;
        self.undo_stack.push_back(op.clone());
        Some(op)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(offset: usize, s: &str) -> EditOperation {
        let len = s.chars().count();
        EditOperation::insert(offset, s.to_string(), offset, offset + len)
    }

    #[test]
    fn test_undo_then_redo_returns_same_operation() {
        let mut history = EditHistory::new();
        history.push(typed(0, "a"));
        history.push(typed(1, "b"));

        let undone = history.pop_undo().unwrap();
        assert_eq!(undone.inserted_text, "b");
        assert!(history.can_redo());

        let redone = history.pop_redo().unwrap();
        assert_eq!(redone, undone);
        assert_eq!(history.undo_count(), 2);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_clears_redo() {
        let mut history = EditHistory::new();
        history.push(typed(0, "a"));
        history.pop_undo();
        assert!(history.can_redo());

        history.push(typed(0, "b"));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_max_size_drops_oldest() {
        let mut history = EditHistory::with_max_size(3);
        for i in 0..5 {
            history.push(typed(i, "x"));
        }
        assert_eq!(history.undo_count(), 3);
        // Oldest remaining starts at offset 2
        let mut last = None;
        while let Some(op) = history.pop_undo() {
            last = Some(op);
        }
        assert_eq!(last.unwrap().offset, 2);
    }

    #[test]
    fn test_ranges() {
        let op = EditOperation::replace(2, "old".into(), "new!".into(), 5, 6);
        assert_eq!(op.deleted_range(), 2..5);
        assert_eq!(op.inserted_range(), 2..6);
    }
}
