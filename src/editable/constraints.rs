//! Edit constraints for draft editing.
//!
//! Constraints define what a draft accepts for a given field kind.

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Constraints that limit what a draft accepts.
#[derive(Debug, Clone)]
pub struct EditConstraints {
    /// Enter inserts a newline instead of being left to the keymap
    pub allow_multiline: bool,

    /// Enable undo/redo tracking
    pub enable_undo: bool,

    /// Maximum length in characters (None = unlimited)
    pub max_length: Option<usize>,

    /// Character filter (None = all characters allowed)
    pub char_filter: Option<CharFilter>,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self::single_line()
    }
}

impl EditConstraints {
    /// Paragraph constraints (textarea)
    pub fn paragraph() -> Self {
        Self {
            allow_multiline: true,
            enable_undo: true,
            max_length: None,
            char_filter: None,
        }
    }

    /// Plain single-line input (text, email, url, password, ...)
    pub fn single_line() -> Self {
        Self {
            allow_multiline: false,
            enable_undo: true,
            max_length: None,
            char_filter: None,
        }
    }

    /// Number input: digits, sign, decimal point and exponent
    pub fn numeric() -> Self {
        Self {
            allow_multiline: false,
            enable_undo: true,
            max_length: None,
            char_filter: Some(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')),
        }
    }

    /// Builder: cap the draft length
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn is_char_allowed(&self, ch: char) -> bool {
        if ch == '\n' {
            return self.allow_multiline;
        }
        match self.char_filter {
            Some(filter) => filter(ch),
            None => true,
        }
    }

    pub fn would_exceed_max_length(&self, current_len: usize, insert_len: usize) -> bool {
        match self.max_length {
            Some(max) => current_len + insert_len > max,
            None => false,
        }
    }
}
