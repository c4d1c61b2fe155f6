//! Draft editing for inline fields.
//!
//! While a field is in edit mode its in-progress value lives in an
//! [`EditableState`]: a buffer with a caret, a selection and undo history.
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: traits abstracting over buffer implementations
//! - [`StringBuffer`]: buffer for single-line inputs (backed by `String`)
//! - [`RopeBuffer`]: buffer for paragraphs (backed by `ropey::Rope`)
//! - [`EditConstraints`]: what a given field kind accepts
//! - [`TextEditMsg`]: editing operations routed from the keymap
//!
//! # Example
//!
//! ```
//! use easy_edit::editable::{EditableState, StringBuffer, EditConstraints};
//!
//! let mut state = EditableState::new(
//!     StringBuffer::from_text("hello"),
//!     EditConstraints::single_line(),
//! );
//! state.insert_char('!');
//! assert_eq!(state.text(), "hello!");
//! ```

mod buffer;
mod constraints;
mod history;
mod messages;
mod selection;
mod state;

pub use buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
pub use constraints::{CharFilter, EditConstraints};
pub use history::{EditHistory, EditOperation};
pub use messages::{MoveTarget, TextEditMsg};
pub use selection::Selection;
pub use state::EditableState;
