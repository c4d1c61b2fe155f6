//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use easy_edit::props::Attributes;
use easy_edit::{EasyEdit, EasyEditProps, FieldValue};

/// Paragraph props named "test"
pub fn paragraph_props() -> EasyEditProps {
    EasyEditProps::textarea().with_attributes(Attributes::named("test"))
}

/// Shared log of callback invocations, in firing order
pub type CallLog = Rc<RefCell<Vec<String>>>;

/// A widget whose every callback appends to the returned log
///
/// Entries look like `change:abc`, `save:abc`, `cancel`, `hover_in`.
pub fn recording_widget(props: EasyEditProps) -> (EasyEdit, CallLog) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));

    let value_cb = |name: &'static str| {
        let log = log.clone();
        move |v: &FieldValue| log.borrow_mut().push(format!("{}:{}", name, v.as_text()))
    };
    let event_cb = |name: &'static str| {
        let log = log.clone();
        move || log.borrow_mut().push(name.to_string())
    };

    let widget = EasyEdit::new(props)
        .on_change(value_cb("change"))
        .on_save(value_cb("save"))
        .on_focus(value_cb("focus"))
        .on_blur(value_cb("blur"))
        .on_cancel(event_cb("cancel"))
        .on_delete(event_cb("delete"))
        .on_hover_in(event_cb("hover_in"))
        .on_hover_out(event_cb("hover_out"));

    (widget, log)
}

/// Entries in `log` starting with `prefix`
pub fn calls(log: &CallLog, prefix: &str) -> Vec<String> {
    log.borrow()
        .iter()
        .filter(|entry| entry.starts_with(prefix))
        .cloned()
        .collect()
}

// DOM key codes
pub const KEY_ENTER: u32 = 13;
pub const KEY_ESCAPE: u32 = 27;
pub const KEY_Z: u32 = 90;
