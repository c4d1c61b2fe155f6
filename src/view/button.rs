//! Button rendering primitives
//!
//! Pure functions: the caller decides which buttons show via props.

use crate::props::EasyEditProps;

use super::node::{Element, Node};

/// Which action a button triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Save,
    Cancel,
    Delete,
}

impl ButtonKind {
    pub fn name(self) -> &'static str {
        match self {
            ButtonKind::Save => "save",
            ButtonKind::Cancel => "cancel",
            ButtonKind::Delete => "delete",
        }
    }
}

/// Render a single button
pub fn render_button(props: &EasyEditProps, kind: ButtonKind, label: &str) -> Element {
    Element::new("button")
        .with_class(props.class("easy-edit-button"))
        .with_attr("type", "button")
        .with_attr("name", kind.name())
        .with_text(label)
}

/// Render the visible buttons in save, cancel, delete order
///
/// Returns None when every button is hidden.
pub fn render_buttons(props: &EasyEditProps) -> Option<Element> {
    let buttons: Vec<Node> = [
        (
            ButtonKind::Save,
            props.hide_save_button,
            &props.save_button_label,
        ),
        (
            ButtonKind::Cancel,
            props.hide_cancel_button,
            &props.cancel_button_label,
        ),
        (
            ButtonKind::Delete,
            props.hide_delete_button,
            &props.delete_button_label,
        ),
    ]
    .into_iter()
    .filter(|(_, hidden, _)| !hidden)
    .map(|(kind, _, label)| render_button(props, kind, label).into())
    .collect();

    if buttons.is_empty() {
        return None;
    }

    Some(
        Element::new("div")
            .with_class(props.class("easy-edit-button-wrapper"))
            .with_children(buttons),
    )
}
