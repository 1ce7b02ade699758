//! Inline style declarations (`style="..."` attribute)

/// Ordered list of `property: value` declarations on one element
///
/// Property names are stored lower-cased. Setting an existing property
/// replaces its value in place, so the serialized order stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `style` attribute value
    ///
    /// Malformed declarations (no colon, empty name) are dropped, matching
    /// how browsers recover from bad inline CSS.
    pub fn parse(text: &str) -> Self {
        let mut style = Self::new();
        for decl in text.split(';') {
            let Some((name, value)) = decl.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            style.set(name, value);
        }
        style
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        let property = property.to_ascii_lowercase();
        self.declarations
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let property = property.to_ascii_lowercase();
        let value = value.into();
        match self.declarations.iter_mut().find(|(name, _)| *name == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property, value)),
        }
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let property = property.to_ascii_lowercase();
        let idx = self
            .declarations
            .iter()
            .position(|(name, _)| *name == property)?;
        Some(self.declarations.remove(idx).1)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// `background-color` shorthand accessor
    pub fn background_color(&self) -> Option<&str> {
        self.get("background-color")
    }

    /// Serialize back to attribute text (`a: b; c: d`)
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
