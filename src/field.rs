//! Field kinds, option lists and field values
//!
//! A field kind decides which input control the edit view renders, whether
//! the draft is multi-line, and how the committed value is displayed.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::editable::EditConstraints;

/// The input control an inline field edits with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Email,
    Url,
    Password,
    Color,
    Date,
    DatetimeLocal,
    Time,
    Month,
    Week,
    Range,
    /// Multi-line paragraph
    Textarea,
    Select,
    Radio,
    Checkbox,
    /// Free text with suggestions
    Datalist,
}

impl FieldKind {
    pub const ALL: [FieldKind; 17] = [
        FieldKind::Text,
        FieldKind::Number,
        FieldKind::Email,
        FieldKind::Url,
        FieldKind::Password,
        FieldKind::Color,
        FieldKind::Date,
        FieldKind::DatetimeLocal,
        FieldKind::Time,
        FieldKind::Month,
        FieldKind::Week,
        FieldKind::Range,
        FieldKind::Textarea,
        FieldKind::Select,
        FieldKind::Radio,
        FieldKind::Checkbox,
        FieldKind::Datalist,
    ];

    /// Name as used in props and the `type` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            FieldKind::Url => "url",
            FieldKind::Password => "password",
            FieldKind::Color => "color",
            FieldKind::Date => "date",
            FieldKind::DatetimeLocal => "datetime-local",
            FieldKind::Time => "time",
            FieldKind::Month => "month",
            FieldKind::Week => "week",
            FieldKind::Range => "range",
            FieldKind::Textarea => "textarea",
            FieldKind::Select => "select",
            FieldKind::Radio => "radio",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Datalist => "datalist",
        }
    }

    /// Only paragraphs treat plain Enter as text
    pub fn is_multiline(self) -> bool {
        matches!(self, FieldKind::Textarea)
    }

    /// Kinds whose value is picked from an option list
    pub fn has_options(self) -> bool {
        matches!(
            self,
            FieldKind::Select | FieldKind::Radio | FieldKind::Checkbox | FieldKind::Datalist
        )
    }

    /// Kinds whose draft is free text edited keystroke by keystroke
    pub fn is_textual(self) -> bool {
        !matches!(
            self,
            FieldKind::Select | FieldKind::Radio | FieldKind::Checkbox
        )
    }

    /// Checkbox groups hold several values
    pub fn is_multi_valued(self) -> bool {
        matches!(self, FieldKind::Checkbox)
    }

    pub fn constraints(self) -> EditConstraints {
        match self {
            FieldKind::Textarea => EditConstraints::paragraph(),
            FieldKind::Number | FieldKind::Range => EditConstraints::numeric(),
            _ => EditConstraints::single_line(),
        }
    }

    /// Class of the rendered input control (before the CSS prefix)
    pub fn base_class(self) -> &'static str {
        match self {
            FieldKind::Textarea => "easy-edit-textarea",
            FieldKind::Select => "easy-edit-select",
            FieldKind::Radio => "easy-edit-radio",
            FieldKind::Checkbox => "easy-edit-checkbox",
            FieldKind::Color => "easy-edit-color",
            _ => "easy-edit-input",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "paragraph" => return Ok(FieldKind::Textarea),
            "datetime" | "datetime_local" => return Ok(FieldKind::DatetimeLocal),
            "autocomplete" => return Ok(FieldKind::Datalist),
            _ => {}
        }
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| FieldError::UnsupportedKind(s.to_string()))
    }
}

impl Serialize for FieldKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors raised while interpreting field configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    UnsupportedKind(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::UnsupportedKind(k) => write!(f, "Unsupported field type: {}", k),
        }
    }
}

impl std::error::Error for FieldError {}

/// One entry of a select/radio/checkbox/datalist option list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    #[serde(deserialize_with = "deserialize_scalar")]
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Value of an inline field
///
/// Deserializes from any scalar (`42` reads as `"42"`), a list of scalars,
/// or null for the empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "RawValue")]
pub enum FieldValue {
    Text(String),
    /// Checkbox groups
    Many(Vec<String>),
}

/// A props-file scalar; numbers and booleans keep their written form
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Empty,
    One(Scalar),
    Many(Vec<Scalar>),
}

impl From<RawValue> for FieldValue {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Empty => FieldValue::default(),
            RawValue::One(s) => FieldValue::Text(s.into()),
            RawValue::Many(v) => FieldValue::Many(v.into_iter().map(String::from).collect()),
        }
    }
}

/// Read a scalar of any type as text
pub(crate) fn deserialize_scalar<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Scalar::deserialize(d).map(String::from)
}

/// Read a map of scalars as text, for pass-through attributes
pub(crate) fn deserialize_scalar_map<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    let raw = BTreeMap::<String, Scalar>::deserialize(d)?;
    Ok(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::Many(values)
    }
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Many(v) => v.is_empty(),
        }
    }

    /// Text form; lists are joined with ", "
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Many(v) => v.join(", "),
        }
    }

    /// List form; a non-empty text value becomes a single entry
    pub fn as_list(&self) -> Vec<String> {
        match self {
            FieldValue::Text(s) if s.is_empty() => Vec::new(),
            FieldValue::Text(s) => vec![s.clone()],
            FieldValue::Many(v) => v.clone(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        match self {
            FieldValue::Text(s) => s == value,
            FieldValue::Many(v) => v.iter().any(|s| s == value),
        }
    }

    /// Coerce into the shape `kind` stores
    pub fn normalized_for(self, kind: FieldKind) -> FieldValue {
        if kind.is_multi_valued() {
            FieldValue::Many(self.as_list())
        } else {
            match self {
                FieldValue::Many(v) => FieldValue::Text(v.into_iter().next().unwrap_or_default()),
                text => text,
            }
        }
    }
}

/// Text shown in the display view for a committed value
pub fn display_text(kind: FieldKind, value: &FieldValue, options: &[FieldOption]) -> String {
    let label_for = |v: &str| {
        options
            .iter()
            .find(|o| o.value == v)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| v.to_string())
    };

    match kind {
        FieldKind::Password => "\u{2022}".repeat(value.as_text().chars().count()),
        FieldKind::Checkbox => value
            .as_list()
            .iter()
            .map(|v| label_for(v))
            .collect::<Vec<_>>()
            .join(", "),
        _ if kind.has_options() => label_for(&value.as_text()),
        _ => value.as_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_case_insensitive() {
        assert_eq!("textarea".parse::<FieldKind>(), Ok(FieldKind::Textarea));
        assert_eq!("TEXTAREA".parse::<FieldKind>(), Ok(FieldKind::Textarea));
        assert_eq!("datetime-local".parse::<FieldKind>(), Ok(FieldKind::DatetimeLocal));
        assert_eq!("autocomplete".parse::<FieldKind>(), Ok(FieldKind::Datalist));
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = "hologram".parse::<FieldKind>().unwrap_err();
        assert_eq!(err, FieldError::UnsupportedKind("hologram".to_string()));
        assert!(err.to_string().contains("hologram"));
    }

    #[test]
    fn test_every_kind_round_trips_its_name() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.as_str().parse::<FieldKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_only_textarea_is_multiline() {
        let multiline: Vec<_> = FieldKind::ALL
            .into_iter()
            .filter(|k| k.is_multiline())
            .collect();
        assert_eq!(multiline, vec![FieldKind::Textarea]);
    }

    #[test]
    fn test_value_shapes() {
        let many = FieldValue::Many(vec!["a".into(), "b".into()]);
        assert_eq!(many.as_text(), "a, b");
        assert!(many.contains("b"));
        assert!(FieldValue::default().is_empty());
        assert_eq!(FieldValue::from("x").as_list(), vec!["x".to_string()]);
    }

    #[test]
    fn test_normalized_for() {
        let v = FieldValue::from("red").normalized_for(FieldKind::Checkbox);
        assert_eq!(v, FieldValue::Many(vec!["red".into()]));
        let v = FieldValue::Many(vec!["a".into(), "b".into()]).normalized_for(FieldKind::Select);
        assert_eq!(v, FieldValue::from("a"));
    }

    #[test]
    fn test_display_text() {
        let options = vec![FieldOption::new("r", "Red"), FieldOption::new("g", "Green")];
        assert_eq!(
            display_text(FieldKind::Select, &FieldValue::from("g"), &options),
            "Green"
        );
        assert_eq!(
            display_text(
                FieldKind::Checkbox,
                &FieldValue::Many(vec!["r".into(), "g".into()]),
                &options
            ),
            "Red, Green"
        );
        assert_eq!(
            display_text(FieldKind::Password, &FieldValue::from("abc"), &[]),
            "\u{2022}\u{2022}\u{2022}"
        );
        assert_eq!(
            display_text(FieldKind::Select, &FieldValue::from("unknown"), &options),
            "unknown"
        );
        // Free-text kinds ignore any option list
        assert_eq!(
            display_text(FieldKind::Text, &FieldValue::from("r"), &options),
            "r"
        );
        assert_eq!(
            display_text(FieldKind::Datalist, &FieldValue::from("r"), &options),
            "Red"
        );
    }

    #[test]
    fn test_value_deserializes_from_scalars() {
        let cases = [
            ("abc", FieldValue::from("abc")),
            ("42", FieldValue::from("42")),
            ("-3", FieldValue::from("-3")),
            ("2.5", FieldValue::from("2.5")),
            ("true", FieldValue::from("true")),
            ("~", FieldValue::default()),
            ("[r, 7]", FieldValue::Many(vec!["r".into(), "7".into()])),
        ];
        for (yaml, expected) in cases {
            let value: FieldValue = serde_yaml::from_str(yaml).unwrap();
            assert_eq!(value, expected, "{}", yaml);
        }
        let value: FieldValue = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(value, FieldValue::Many(vec!["1".into(), "2".into()]));
    }

    #[test]
    fn test_option_value_accepts_numbers() {
        let opt: FieldOption = serde_yaml::from_str("{value: 3, label: Three}").unwrap();
        assert_eq!(opt, FieldOption::new("3", "Three"));
    }

    #[test]
    fn test_kind_deserializes_from_yaml() {
        let kind: FieldKind = serde_yaml::from_str("textarea").unwrap();
        assert_eq!(kind, FieldKind::Textarea);
        assert!(serde_yaml::from_str::<FieldKind>("bogus").is_err());
    }
}
