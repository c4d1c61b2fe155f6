//! Configuration a parent hands to an inline field
//!
//! Props are plain data: they deserialize from YAML/JSON with every field
//! optional, and builder methods cover the common cases in code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::EasyEditConfig;
use crate::field::{deserialize_scalar_map, FieldKind, FieldOption, FieldValue};

pub const DEFAULT_PLACEHOLDER: &str = "Click to edit";
pub const DEFAULT_SAVE_LABEL: &str = "Save";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";
pub const DEFAULT_DELETE_LABEL: &str = "Delete";
pub const DEFAULT_VALIDATION_MESSAGE: &str = "Please provide a valid value";

/// Where the save/cancel/delete buttons sit relative to the input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonsPosition {
    Before,
    #[default]
    After,
}

/// Attributes passed through to a rendered element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub name: Option<String>,
    pub id: Option<String>,
    /// Space-separated classes appended after the element's own class
    #[serde(alias = "className", alias = "class")]
    pub class_name: Option<String>,
    /// Any other attribute, passed through verbatim
    #[serde(flatten, deserialize_with = "deserialize_scalar_map")]
    pub extra: BTreeMap<String, String>,
}

impl Attributes {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Extra classes in order, empty entries dropped
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_name
            .as_deref()
            .unwrap_or("")
            .split_whitespace()
    }
}

/// Everything a parent can configure on an inline field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EasyEditProps {
    #[serde(rename = "type", alias = "kind")]
    pub kind: FieldKind,
    pub value: FieldValue,
    pub placeholder: String,
    pub attributes: Attributes,
    /// Attributes for the display wrapper
    pub view_attributes: Attributes,
    pub options: Vec<FieldOption>,
    pub disable_auto_submit: bool,
    pub disable_auto_cancel: bool,
    /// Commit the draft when the control loses focus
    pub save_on_blur: bool,
    /// Discard the draft when the control loses focus
    pub cancel_on_blur: bool,
    /// Clicking the display does nothing when false
    pub allow_edit: bool,
    /// Start in edit mode
    pub edit_mode: bool,
    pub save_button_label: String,
    pub cancel_button_label: String,
    pub delete_button_label: String,
    pub hide_save_button: bool,
    pub hide_cancel_button: bool,
    pub hide_delete_button: bool,
    pub buttons_position: ButtonsPosition,
    /// Help text under the input while editing
    pub instructions: Option<String>,
    pub validation_message: String,
    /// Prepended to every class the widget emits
    pub css_class_prefix: String,
}

impl Default for EasyEditProps {
    fn default() -> Self {
        Self {
            kind: FieldKind::default(),
            value: FieldValue::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            attributes: Attributes::default(),
            view_attributes: Attributes::default(),
            options: Vec::new(),
            disable_auto_submit: false,
            disable_auto_cancel: false,
            save_on_blur: false,
            cancel_on_blur: false,
            allow_edit: true,
            edit_mode: false,
            save_button_label: DEFAULT_SAVE_LABEL.to_string(),
            cancel_button_label: DEFAULT_CANCEL_LABEL.to_string(),
            delete_button_label: DEFAULT_DELETE_LABEL.to_string(),
            hide_save_button: false,
            hide_cancel_button: false,
            hide_delete_button: true,
            buttons_position: ButtonsPosition::default(),
            instructions: None,
            validation_message: DEFAULT_VALIDATION_MESSAGE.to_string(),
            css_class_prefix: String::new(),
        }
    }
}

impl EasyEditProps {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Defaults taken from the user's persisted config
    pub fn from_config(kind: FieldKind, config: &EasyEditConfig) -> Self {
        Self {
            kind,
            placeholder: config.placeholder.clone(),
            save_button_label: config.save_button_label.clone(),
            cancel_button_label: config.cancel_button_label.clone(),
            delete_button_label: config.delete_button_label.clone(),
            validation_message: config.validation_message.clone(),
            css_class_prefix: config.css_class_prefix.clone(),
            ..Self::default()
        }
    }

    pub fn textarea() -> Self {
        Self::new(FieldKind::Textarea)
    }

    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = value.into().normalized_for(self.kind);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.attributes.name = Some(name.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.attributes.class_name = Some(class_name.into());
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn disable_auto_submit(mut self) -> Self {
        self.disable_auto_submit = true;
        self
    }

    pub fn disable_auto_cancel(mut self) -> Self {
        self.disable_auto_cancel = true;
        self
    }

    pub fn save_on_blur(mut self) -> Self {
        self.save_on_blur = true;
        self
    }

    pub fn cancel_on_blur(mut self) -> Self {
        self.cancel_on_blur = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.allow_edit = false;
        self
    }

    pub fn in_edit_mode(mut self) -> Self {
        self.edit_mode = true;
        self
    }

    pub fn show_delete_button(mut self) -> Self {
        self.hide_delete_button = false;
        self
    }

    /// Prefix a widget class name
    pub fn class(&self, name: &str) -> String {
        format!("{}{}", self.css_class_prefix, name)
    }

    /// Parse props from YAML (JSON is valid YAML too)
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let props: EasyEditProps = serde_yaml::from_str(yaml)?;
        let kind = props.kind;
        Ok(Self {
            value: props.value.clone().normalized_for(kind),
            ..props
        })
    }

    /// Parse props from YAML, taking unset fields from `config`
    pub fn from_yaml_with_config(
        yaml: &str,
        config: &EasyEditConfig,
    ) -> Result<Self, serde_yaml::Error> {
        let base = serde_yaml::to_value(Self::from_config(FieldKind::default(), config))?;
        let overlay: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let merged = merge_top_level(base, overlay);
        let props: EasyEditProps = serde_yaml::from_value(merged)?;
        let kind = props.kind;
        Ok(Self {
            value: props.value.clone().normalized_for(kind),
            ..props
        })
    }
}

/// Overlay keys replace base keys; `kind` is folded into `type`
fn merge_top_level(base: serde_yaml::Value, overlay: serde_yaml::Value) -> serde_yaml::Value {
    use serde_yaml::Value;

    let (Value::Mapping(mut base), Value::Mapping(overlay)) = (base.clone(), overlay) else {
        return base;
    };
    for (key, value) in overlay {
        let key = match key.as_str() {
            Some("kind") => Value::from("type"),
            _ => key,
        };
        base.insert(key, value);
    }
    Value::Mapping(base)
}
