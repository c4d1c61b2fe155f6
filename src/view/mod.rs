//! View module - renders the model into a DOM-like tree
//!
//! Rendering is a pure function of the model. Hosts either paint the tree
//! directly or serialise it with `Node::to_html`.

mod button;
mod control;
mod node;
mod selector;

pub use button::{render_button, render_buttons, ButtonKind};
pub use control::render_control;
pub use node::{Element, Node};
pub use selector::{Selector, SelectorError};

use crate::field::{display_text, FieldKind, FieldValue};
use crate::model::{EasyEditModel, ViewState};
use crate::props::{ButtonsPosition, EasyEditProps};

/// Render the whole widget for its current view state
pub fn render(model: &EasyEditModel) -> Node {
    match model.view {
        ViewState::Viewing => render_display(model).into(),
        ViewState::Editing => render_editing(model).into(),
    }
}

/// Render only the input control, as a stand-alone field
pub fn render_field(kind: FieldKind, value: &FieldValue, props: &EasyEditProps) -> Node {
    render_control(kind, value, props).into()
}

/// Display view: the committed value, or the placeholder when empty
pub fn render_display(model: &EasyEditModel) -> Element {
    let props = &model.props;

    let wrapper = Element::new("div")
        .with_class(props.class("easy-edit-wrapper"))
        .with_classes(model.is_hovering.then(|| props.class("easy-edit-hover-on")))
        .with_classes((!props.allow_edit).then(|| props.class("easy-edit-not-allowed")))
        .with_classes(props.view_attributes.classes());
    let wrapper = control::apply_attributes(wrapper, &props.view_attributes);

    if model.committed.is_empty() {
        wrapper.with_child(
            Element::new("span")
                .with_class(props.class("easy-edit-placeholder"))
                .with_text(props.placeholder.as_str()),
        )
    } else {
        wrapper.with_text(display_text(props.kind, &model.committed, &props.options))
    }
}

/// Edit view: control, buttons, instructions and validation message
pub fn render_editing(model: &EasyEditModel) -> Element {
    let props = &model.props;

    let component = Element::new("div")
        .with_class(props.class("easy-edit-component-wrapper"))
        .with_child(render_control(props.kind, &model.draft_value(), props));
    let buttons = render_buttons(props);

    let mut wrapper = Element::new("div").with_class(props.class("easy-edit-inline-wrapper"));
    if props.buttons_position == ButtonsPosition::Before {
        wrapper = wrapper.with_children(buttons.clone().map(Node::from));
    }
    wrapper = wrapper.with_child(component);
    if props.buttons_position == ButtonsPosition::After {
        wrapper = wrapper.with_children(buttons.map(Node::from));
    }

    if let Some(ref instructions) = props.instructions {
        wrapper = wrapper.with_child(
            Element::new("div")
                .with_class(props.class("easy-edit-instructions"))
                .with_text(instructions.as_str()),
        );
    }

    if !model.is_valid {
        wrapper = wrapper.with_child(
            Element::new("div")
                .with_class(props.class("easy-edit-validation-error"))
                .with_text(props.validation_message.as_str()),
        );
    }

    wrapper
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldOption;
    use crate::props::Attributes;

    fn editing(props: EasyEditProps) -> EasyEditModel {
        EasyEditModel::new(props.in_edit_mode())
    }

    #[test]
    fn test_display_shows_placeholder_when_empty() {
        let model = EasyEditModel::new(EasyEditProps::textarea());
        let tree = render(&model);
        let span = tree.query("div.easy-edit-wrapper span.easy-edit-placeholder");
        assert_eq!(
            span.unwrap().map(|e| e.text_content()).as_deref(),
            Some("Click to edit")
        );
    }

    #[test]
    fn test_display_shows_value_not_placeholder() {
        let model = EasyEditModel::new(EasyEditProps::textarea().with_value("Test"));
        let tree = render(&model);
        assert_eq!(tree.count(".easy-edit-placeholder"), 0);
        assert_eq!(tree.text_content(), "Test");
    }

    #[test]
    fn test_display_uses_option_labels() {
        let props = EasyEditProps::new(FieldKind::Select)
            .with_options(vec![FieldOption::new("r", "Red")])
            .with_value("r");
        assert_eq!(render(&EasyEditModel::new(props)).text_content(), "Red");
    }

    #[test]
    fn test_display_state_classes() {
        let mut model = EasyEditModel::new(EasyEditProps::default().read_only());
        model.is_hovering = true;
        let tree = render(&model);
        assert_eq!(
            tree.count("div.easy-edit-wrapper.easy-edit-hover-on.easy-edit-not-allowed"),
            1
        );
    }

    #[test]
    fn test_view_attributes_on_wrapper() {
        let mut props = EasyEditProps::default();
        props.view_attributes = Attributes::default()
            .with_class("shown")
            .with_attr("data-row", "3");
        let tree = render(&EasyEditModel::new(props));
        assert_eq!(tree.count(r#"div.easy-edit-wrapper.shown[data-row="3"]"#), 1);
    }

    #[test]
    fn test_editing_layout_buttons_after() {
        let tree = render(&editing(EasyEditProps::textarea()));
        let wrapper = tree.query(".easy-edit-inline-wrapper").unwrap().unwrap();
        let classes: Vec<_> = wrapper
            .child_elements()
            .map(|e| e.classes[0].clone())
            .collect();
        assert_eq!(
            classes,
            vec!["easy-edit-component-wrapper", "easy-edit-button-wrapper"]
        );
    }

    #[test]
    fn test_editing_layout_buttons_before() {
        let mut props = EasyEditProps::textarea();
        props.buttons_position = ButtonsPosition::Before;
        let tree = render(&editing(props));
        let wrapper = tree.query(".easy-edit-inline-wrapper").unwrap().unwrap();
        let first = wrapper.child_elements().next().unwrap();
        assert!(first.has_class("easy-edit-button-wrapper"));
    }

    #[test]
    fn test_instructions_and_validation_message() {
        let mut model = editing(EasyEditProps::textarea().with_instructions("Be brief"));
        assert_eq!(render(&model).count(".easy-edit-validation-error"), 0);

        model.is_valid = false;
        let tree = render(&model);
        let instructions = tree.query(".easy-edit-instructions").unwrap().unwrap();
        assert_eq!(instructions.text_content(), "Be brief");
        let error = tree.query(".easy-edit-validation-error").unwrap().unwrap();
        assert_eq!(error.text_content(), "Please provide a valid value");
    }

    #[test]
    fn test_render_field_is_control_only() {
        let props = EasyEditProps::textarea()
            .with_attributes(Attributes::named("test"))
            .with_value("TEST VALUE");
        let node = render_field(FieldKind::Textarea, &props.value, &props);
        assert_eq!(node.count(r#"textarea[name="test"]"#), 1);
        assert_eq!(node.count(".easy-edit-inline-wrapper"), 0);
    }

    #[test]
    fn test_html_of_display_view() {
        let model = EasyEditModel::new(EasyEditProps::default().with_value("a<b"));
        assert_eq!(
            render(&model).to_html(),
            r#"<div class="easy-edit-wrapper">a&lt;b</div>"#
        );
    }
}
