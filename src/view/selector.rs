//! Minimal CSS selectors for querying rendered trees
//!
//! Supported: `tag`, `*`, `.class`, `#id`, `[attr]`, `[attr="value"]`,
//! compounds of those (`textarea.a.b[name="x"]`) and the descendant
//! combinator (whitespace).

use std::fmt;

use super::node::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    Empty,
    /// A character that cannot start a selector part
    Unexpected { ch: char, selector: String },
    /// `.`, `#` or `[` not followed by a name
    MissingName(String),
    UnterminatedAttribute(String),
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::Empty => write!(f, "Empty selector"),
            SelectorError::Unexpected { ch, selector } => {
                write!(f, "Unexpected '{}' in selector: {}", ch, selector)
            }
            SelectorError::MissingName(s) => write!(f, "Missing name in selector: {}", s),
            SelectorError::UnterminatedAttribute(s) => {
                write!(f, "Unterminated attribute in selector: {}", s)
            }
        }
    }
}

impl std::error::Error for SelectorError {}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    value: Option<String>,
}

/// One compound selector: every part must match the same element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    fn matches(&self, el: &Element) -> bool {
        if let Some(ref tag) = self.tag {
            if !tag.eq_ignore_ascii_case(&el.tag) {
                return false;
            }
        }
        if let Some(ref id) = self.id {
            if el.attr("id").as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|a| match a.value {
            None => el.has_attr(&a.name),
            Some(ref v) => el.attr(&a.name).as_deref() == Some(v.as_str()),
        })
    }
}

/// A parsed selector: compounds joined by descendant combinators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Compound>,
}

impl Selector {
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        let compounds = split_compounds(selector)?
            .into_iter()
            .map(|part| parse_compound(part, selector))
            .collect::<Result<Vec<_>, _>>()?;

        if compounds.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self { compounds })
    }

    /// Does `el`, whose ancestors are `ancestors` (root first), match?
    pub fn matches(&self, el: &Element, ancestors: &[&Element]) -> bool {
        let Some((last, rest)) = self.compounds.split_last() else {
            return false;
        };
        if !last.matches(el) {
            return false;
        }

        // Match remaining compounds right to left against nearest ancestors
        let mut pending = rest.iter().rev().peekable();
        for ancestor in ancestors.iter().rev() {
            match pending.peek() {
                Some(compound) if compound.matches(ancestor) => {
                    pending.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        pending.peek().is_none()
    }
}

/// Split on whitespace outside of `[...]`
fn split_compounds(selector: &str) -> Result<Vec<&str>, SelectorError> {
    let mut parts = Vec::new();
    let mut start = None;
    let mut in_brackets = false;
    let mut quote: Option<char> = None;

    for (i, ch) in selector.char_indices() {
        match (ch, quote) {
            (q, Some(open)) if q == open => quote = None,
            (_, Some(_)) => {}
            ('"' | '\'', None) if in_brackets => quote = Some(ch),
            ('[', None) => in_brackets = true,
            (']', None) => in_brackets = false,
            (c, None) if c.is_whitespace() && !in_brackets => {
                if let Some(s) = start.take() {
                    parts.push(&selector[s..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }

    if in_brackets || quote.is_some() {
        return Err(SelectorError::UnterminatedAttribute(selector.to_string()));
    }
    if let Some(s) = start {
        parts.push(&selector[s..]);
    }
    Ok(parts)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(part: &str, selector: &str) -> Result<Compound, SelectorError> {
    let mut compound = Compound::default();
    let mut rest = part;

    let tag_len = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
    if tag_len > 0 {
        compound.tag = Some(rest[..tag_len].to_ascii_lowercase());
        rest = &rest[tag_len..];
    } else if let Some(r) = rest.strip_prefix('*') {
        rest = r;
    }

    while let Some(ch) = rest.chars().next() {
        match ch {
            '.' | '#' => {
                let body = &rest[1..];
                let len = body.find(|c: char| !is_name_char(c)).unwrap_or(body.len());
                if len == 0 {
                    return Err(SelectorError::MissingName(selector.to_string()));
                }
                let name = body[..len].to_string();
                if ch == '.' {
                    compound.classes.push(name);
                } else {
                    compound.id = Some(name);
                }
                rest = &body[len..];
            }
            '[' => {
                let close = rest
                    .find(']')
                    .ok_or_else(|| SelectorError::UnterminatedAttribute(selector.to_string()))?;
                compound.attrs.push(parse_attr(&rest[1..close], selector)?);
                rest = &rest[close + 1..];
            }
            _ => {
                return Err(SelectorError::Unexpected {
                    ch,
                    selector: selector.to_string(),
                })
            }
        }
    }

    Ok(compound)
}

fn parse_attr(body: &str, selector: &str) -> Result<AttrMatch, SelectorError> {
    let (name, value) = match body.split_once('=') {
        Some((n, v)) => {
            let v = v.trim();
            let unquoted = v
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .or_else(|| v.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
                .unwrap_or(v);
            (n.trim(), Some(unquoted.to_string()))
        }
        None => (body.trim(), None),
    };

    if name.is_empty() || !name.chars().all(is_name_char) {
        return Err(SelectorError::MissingName(selector.to_string()));
    }
    Ok(AttrMatch {
        name: name.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::node::Node;

    fn sample() -> Node {
        Element::new("div")
            .with_class("outer")
            .with_child(
                Element::new("form")
                    .with_attr("id", "f")
                    .with_child(
                        Element::new("textarea")
                            .with_classes(["easy-edit-textarea", "test"])
                            .with_attr("name", "test"),
                    )
                    .with_child(Element::new("input").with_attr("name", "other")),
            )
            .into()
    }

    #[test]
    fn test_tag_class_attr_compound() {
        let tree = sample();
        assert_eq!(tree.count("textarea"), 1);
        assert_eq!(tree.count("textarea.test.easy-edit-textarea"), 1);
        assert_eq!(tree.count("textarea.missing"), 0);
        assert_eq!(tree.count(r#"textarea[name="test"]"#), 1);
        assert_eq!(tree.count("textarea[name='test']"), 1);
        assert_eq!(tree.count("[name]"), 2);
        assert_eq!(tree.count("[name=other]"), 1);
    }

    #[test]
    fn test_id_and_universal() {
        let tree = sample();
        assert_eq!(tree.count("#f"), 1);
        assert_eq!(tree.count("*"), 4);
    }

    #[test]
    fn test_descendant_combinator() {
        let tree = sample();
        assert_eq!(tree.count(".outer textarea"), 1);
        assert_eq!(tree.count("div #f input"), 1);
        assert_eq!(tree.count("form div"), 0);
        assert_eq!(tree.count("textarea .outer"), 0);
    }

    #[test]
    fn test_query_returns_first_in_document_order() {
        let tree = sample();
        let el = tree.query("[name]").unwrap().unwrap();
        assert_eq!(el.tag, "textarea");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
        assert!(matches!(
            Selector::parse("div > p"),
            Err(SelectorError::Unexpected { ch: '>', .. })
        ));
        assert!(matches!(
            Selector::parse("input[name"),
            Err(SelectorError::UnterminatedAttribute(_))
        ));
        assert!(matches!(
            Selector::parse("div."),
            Err(SelectorError::MissingName(_))
        ));
    }

    #[test]
    fn test_attribute_value_with_space() {
        let tree: Node = Element::new("input").with_attr("title", "a b").into();
        assert_eq!(tree.count(r#"input[title="a b"]"#), 1);
    }
}
