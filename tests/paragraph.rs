//! Paragraph (textarea) field behaviour
//!
//! Tests the stand-alone paragraph control and its keyboard handling inside
//! the inline widget.

mod common;
use common::{calls, paragraph_props, recording_widget, KEY_ENTER, KEY_ESCAPE};

use easy_edit::view::render_field;
use easy_edit::{EasyEditProps, FieldKind, FieldValue, ViewState};

fn field(props: &EasyEditProps) -> easy_edit::Node {
    render_field(FieldKind::Textarea, &props.value, props)
}

// ========================================================================
// Rendering
// ========================================================================

#[test]
fn test_textarea_carries_name() {
    let props = paragraph_props().with_value("TEST VALUE");
    assert_eq!(field(&props).count(r#"textarea[name="test"]"#), 1);
}

#[test]
fn test_default_placeholder() {
    let props = paragraph_props();
    let textarea = field(&props).query("textarea").unwrap().unwrap().clone();
    assert_eq!(textarea.attr("placeholder").as_deref(), Some("Click to edit"));
}

#[test]
fn test_custom_placeholder() {
    let props = paragraph_props().with_placeholder("Write a bio");
    let node = field(&props);
    let textarea = node.query("textarea").unwrap().unwrap();
    assert_eq!(textarea.attr("placeholder").as_deref(), Some("Write a bio"));
}

#[test]
fn test_value_shown_regardless_of_placeholder() {
    for placeholder in ["Click to edit", "Something else", ""] {
        let props = paragraph_props()
            .with_placeholder(placeholder)
            .with_value("TEST VALUE");
        let node = field(&props);
        let textarea = node.query("textarea").unwrap().unwrap();
        assert_eq!(textarea.value().as_deref(), Some("TEST VALUE"));
    }
}

#[test]
fn test_extra_classes_follow_base_class() {
    let props = paragraph_props().with_class_name("test");
    assert_eq!(field(&props).count("textarea.test.easy-edit-textarea"), 1);

    let node = field(&props);
    let textarea = node.query("textarea").unwrap().unwrap();
    assert_eq!(textarea.classes, vec!["easy-edit-textarea", "test"]);
}

#[test]
fn test_html_output() {
    let props = paragraph_props().with_value("a & b");
    assert_eq!(
        field(&props).to_html(),
        r#"<textarea class="easy-edit-textarea" name="test" placeholder="Click to edit">a &amp; b</textarea>"#
    );
}

// ========================================================================
// Change events
// ========================================================================

#[test]
fn test_change_calls_on_change_once() {
    let (mut widget, log) = recording_widget(paragraph_props().in_edit_mode());
    widget.change("abc");
    assert_eq!(calls(&log, "change"), vec!["change:abc"]);

    widget.change("abcd");
    assert_eq!(calls(&log, "change").len(), 2);
}

#[test]
fn test_typing_calls_on_change_per_key() {
    let (mut widget, log) = recording_widget(paragraph_props().in_edit_mode());
    widget.key_down_dom(72, false, true, false, false);
    widget.key_down_dom(73, false, false, false, false);
    assert_eq!(calls(&log, "change"), vec!["change:H", "change:Hi"]);
    assert_eq!(widget.draft(), FieldValue::from("Hi"));
}

// ========================================================================
// Keyboard
// ========================================================================

#[test]
fn test_plain_enter_keeps_editing() {
    let (mut widget, log) = recording_widget(paragraph_props().in_edit_mode());
    widget.change("abc");
    widget.key_down_dom(KEY_ENTER, false, false, false, false);

    assert!(widget.is_editing());
    assert!(calls(&log, "save").is_empty());
    assert_eq!(widget.draft(), FieldValue::from("abc\n"));
}

#[test]
fn test_ctrl_enter_commits_typed_value() {
    let (mut widget, log) = recording_widget(paragraph_props());
    widget.click();
    assert_eq!(widget.render().count("textarea"), 1);
    widget.change("abc");
    widget.key_down_dom(KEY_ENTER, true, false, false, false);

    assert!(!widget.is_editing());
    assert_eq!(widget.model().view, ViewState::Viewing);
    assert_eq!(widget.value(), &FieldValue::from("abc"));
    assert_eq!(calls(&log, "save"), vec!["save:abc"]);
    assert_eq!(widget.render().count("textarea"), 0);
}

#[test]
fn test_ctrl_shift_enter_commits_typed_value() {
    let (mut widget, log) = recording_widget(paragraph_props());
    widget.click();
    widget.change("abc");
    widget.key_down_dom(KEY_ENTER, true, true, false, false);

    assert!(!widget.is_editing());
    assert_eq!(calls(&log, "save"), vec!["save:abc"]);
}

#[test]
fn test_shift_enter_inserts_newline() {
    let (mut widget, log) = recording_widget(paragraph_props());
    widget.click();
    widget.change("abc");
    widget.key_down_dom(KEY_ENTER, false, true, false, false);

    assert!(widget.is_editing());
    assert!(calls(&log, "save").is_empty());
    assert_eq!(widget.draft(), FieldValue::from("abc\n"));
}

#[test]
fn test_escape_cancels() {
    let (mut widget, log) = recording_widget(paragraph_props().with_value("kept"));
    widget.click();
    assert_eq!(widget.draft(), FieldValue::from("kept"));
    widget.change("discarded");
    widget.key_down_dom(KEY_ESCAPE, false, false, false, false);

    assert!(!widget.is_editing());
    assert_eq!(widget.value(), &FieldValue::from("kept"));
    assert_eq!(calls(&log, "cancel"), vec!["cancel"]);
    assert_eq!(widget.render().text_content(), "kept");
}

#[test]
fn test_escape_with_auto_cancel_disabled_keeps_editing() {
    let (mut widget, log) =
        recording_widget(paragraph_props().disable_auto_cancel().in_edit_mode());
    widget.key_down_dom(KEY_ESCAPE, false, false, false, false);

    assert!(widget.is_editing());
    assert!(calls(&log, "cancel").is_empty());
}

#[test]
fn test_enter_with_auto_submit_disabled_keeps_editing() {
    let (mut widget, log) =
        recording_widget(paragraph_props().disable_auto_submit().in_edit_mode());
    widget.change("abc");
    widget.key_down_dom(KEY_ENTER, false, false, false, false);
    widget.key_down_dom(KEY_ENTER, true, false, false, false);

    assert!(widget.is_editing());
    assert!(calls(&log, "save").is_empty());
}

#[test]
fn test_save_button_still_commits_with_auto_submit_disabled() {
    let (mut widget, log) =
        recording_widget(paragraph_props().disable_auto_submit().in_edit_mode());
    widget.change("abc");
    widget.save();

    assert!(!widget.is_editing());
    assert_eq!(calls(&log, "save"), vec!["save:abc"]);
}
