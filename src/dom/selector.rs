//! Compound CSS selectors
//!
//! Supports the subset needed to pick out post elements:
//! `tag`, `*`, `.class`, `#id` and combinations like `article.post#first`,
//! plus comma-separated lists. Combinators (descendant, child, sibling) and
//! attribute or pseudo-class selectors are rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Element;

/// One compound selector: optional tag plus class and id constraints
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compound {
    /// Lower-cased tag name; `None` for `*` or an omitted tag
    pub tag: Option<String>,
    pub classes: Vec<String>,
    pub id: Option<String>,
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => f.write_str(tag)?,
            None if self.classes.is_empty() && self.id.is_none() => f.write_str("*")?,
            None => {}
        }
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}

/// A selector list; an element matches if any compound matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Selector {
    compounds: Vec<Compound>,
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(text: &str) -> Result<Compound, String> {
    if text.is_empty() {
        return Err("Empty selector".to_string());
    }
    if text.chars().any(char::is_whitespace) {
        return Err(format!("Combinators are not supported: '{}'", text));
    }

    let mut compound = Compound::default();
    let mut chars = text.char_indices().peekable();

    // Leading tag name or universal selector
    match chars.peek() {
        Some((_, '*')) => {
            chars.next();
        }
        Some((_, c)) if is_ident_char(*c) => {
            let mut tag = String::new();
            while let Some((_, c)) = chars.peek().copied() {
                if !is_ident_char(c) {
                    break;
                }
                tag.push(c);
                chars.next();
            }
            compound.tag = Some(tag.to_ascii_lowercase());
        }
        _ => {}
    }

    while let Some((pos, marker)) = chars.next() {
        let mut name = String::new();
        while let Some((_, c)) = chars.peek().copied() {
            if !is_ident_char(c) {
                break;
            }
            name.push(c);
            chars.next();
        }
        match marker {
            '.' | '#' if name.is_empty() => {
                return Err(format!(
                    "Expected a name after '{}' at offset {} in '{}'",
                    marker, pos, text
                ));
            }
            '.' => compound.classes.push(name),
            '#' => {
                if compound.id.is_some() {
                    return Err(format!("Multiple ids in '{}'", text));
                }
                compound.id = Some(name);
            }
            other => {
                return Err(format!(
                    "Unsupported selector syntax '{}' at offset {} in '{}'",
                    other, pos, text
                ));
            }
        }
    }

    Ok(compound)
}

impl Selector {
    /// Parse a selector list like `.post` or `article.post, div.entry`
    pub fn parse(text: &str) -> Result<Self, String> {
        let compounds = text
            .split(',')
            .map(|part| parse_compound(part.trim()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { compounds })
    }

    /// Selector matching every element carrying `class`
    pub fn class(class: &str) -> Self {
        Self {
            compounds: vec![Compound {
                classes: vec![class.to_string()],
                ..Compound::default()
            }],
        }
    }

    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    pub fn matches(&self, element: &Element) -> bool {
        self.compounds.iter().any(|c| c.matches(element))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.compounds.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", compound)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

impl TryFrom<String> for Selector {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Selector::parse(&value)
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.to_string()
    }
}
