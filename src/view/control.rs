//! Input control rendering
//!
//! Pure functions from a field kind, a value and props to the control element
//! the user edits in. The control carries the caller's `attributes`: its name,
//! id, extra classes after the base class, and any other attribute verbatim.

use crate::field::{FieldKind, FieldOption, FieldValue};
use crate::props::{Attributes, EasyEditProps};

use super::node::{Element, Node};

/// Render the control for `kind` showing `value`
pub fn render_control(kind: FieldKind, value: &FieldValue, props: &EasyEditProps) -> Element {
    match kind {
        FieldKind::Textarea => render_textarea(value, props),
        FieldKind::Select => render_select(value, props),
        FieldKind::Radio => render_choice_group(kind, "radio", value, props),
        FieldKind::Checkbox => render_choice_group(kind, "checkbox", value, props),
        FieldKind::Datalist => render_datalist(value, props),
        _ => render_input(kind, value, props),
    }
}

/// Base class, caller classes, then name/id/extra attributes
fn decorate(el: Element, kind: FieldKind, props: &EasyEditProps) -> Element {
    let el = el
        .with_class(props.class(kind.base_class()))
        .with_classes(props.attributes.classes());
    apply_attributes(el, &props.attributes)
}

/// Name, id and pass-through attributes (classes are handled separately)
pub(super) fn apply_attributes(el: Element, attributes: &Attributes) -> Element {
    let el = el
        .with_attr_opt("name", attributes.name.as_deref())
        .with_attr_opt("id", attributes.id.as_deref());
    attributes
        .extra
        .iter()
        .fold(el, |el, (k, v)| el.with_attr(k.as_str(), v.as_str()))
}

fn render_textarea(value: &FieldValue, props: &EasyEditProps) -> Element {
    let el = decorate(Element::new("textarea"), FieldKind::Textarea, props)
        .with_attr("placeholder", props.placeholder.as_str());
    let text = value.as_text();
    if text.is_empty() {
        el
    } else {
        el.with_text(text)
    }
}

fn render_input(kind: FieldKind, value: &FieldValue, props: &EasyEditProps) -> Element {
    decorate(
        Element::new("input").with_attr("type", kind.as_str()),
        kind,
        props,
    )
    .with_attr("placeholder", props.placeholder.as_str())
    .with_attr("value", value.as_text())
}

fn render_select(value: &FieldValue, props: &EasyEditProps) -> Element {
    let current = value.as_text();
    let placeholder = Element::new("option")
        .with_attr("value", "")
        .with_flag("disabled", true)
        .with_flag("selected", current.is_empty())
        .with_text(props.placeholder.as_str());

    let options = props.options.iter().map(|opt| {
        Node::from(
            Element::new("option")
                .with_attr("value", opt.value.as_str())
                .with_flag("selected", opt.value == current)
                .with_text(opt.label.as_str()),
        )
    });

    decorate(Element::new("select"), FieldKind::Select, props)
        .with_child(placeholder)
        .with_children(options)
}

/// Radio or checkbox group: one labelled input per option
fn render_choice_group(
    kind: FieldKind,
    input_type: &str,
    value: &FieldValue,
    props: &EasyEditProps,
) -> Element {
    let label_class = props.class(&format!("{}-label", kind.base_class()));
    let name = props.attributes.name.as_deref();

    let items = props.options.iter().map(|opt: &FieldOption| {
        let input = Element::new("input")
            .with_attr("type", input_type)
            .with_attr_opt("name", name)
            .with_attr("value", opt.value.as_str())
            .with_flag("checked", value.contains(&opt.value));
        Node::from(
            Element::new("label")
                .with_class(label_class.as_str())
                .with_child(input)
                .with_text(opt.label.as_str()),
        )
    });

    let group = Element::new("div")
        .with_class(props.class(kind.base_class()))
        .with_classes(props.attributes.classes())
        .with_attr_opt("id", props.attributes.id.as_deref());
    props
        .attributes
        .extra
        .iter()
        .fold(group, |el, (k, v)| el.with_attr(k.as_str(), v.as_str()))
        .with_children(items)
}

/// Text input bound to a `datalist` of suggestions
fn render_datalist(value: &FieldValue, props: &EasyEditProps) -> Element {
    let list_id = format!(
        "{}-list",
        props
            .attributes
            .id
            .as_deref()
            .or(props.attributes.name.as_deref())
            .unwrap_or("easy-edit")
    );

    let input = decorate(
        Element::new("input").with_attr("type", "text"),
        FieldKind::Datalist,
        props,
    )
    .with_attr("list", list_id.as_str())
    .with_attr("placeholder", props.placeholder.as_str())
    .with_attr("value", value.as_text());

    let suggestions = props.options.iter().map(|opt| {
        Node::from(
            Element::new("option")
                .with_attr("value", opt.value.as_str())
                .with_text(opt.label.as_str()),
        )
    });

    Element::new("div")
        .with_class(props.class("easy-edit-datalist"))
        .with_child(input)
        .with_child(
            Element::new("datalist")
                .with_attr("id", list_id)
                .with_children(suggestions),
        )
}
