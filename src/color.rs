//! CSS color values
//!
//! Colors are written into inline styles as the text the user configured,
//! so `#E8F5E9` and `white` survive a config round-trip. Hex values are
//! normalized to lower case.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RGB", "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("{}: {}", s, e))
        };
        match hex.len() {
            3 => {
                // #abc is shorthand for #aabbcc
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Ok(Color::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// Format as lower-case "#rrggbb", or "#rrggbbaa" when not opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Named CSS colors accepted in configuration
const NAMED_COLORS: &[(&str, Color)] = &[
    ("white", Color::rgb(0xFF, 0xFF, 0xFF)),
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("transparent", Color::rgba(0x00, 0x00, 0x00, 0x00)),
    ("red", Color::rgb(0xFF, 0x00, 0x00)),
    ("green", Color::rgb(0x00, 0x80, 0x00)),
    ("blue", Color::rgb(0x00, 0x00, 0xFF)),
    ("gray", Color::rgb(0x80, 0x80, 0x80)),
    ("silver", Color::rgb(0xC0, 0xC0, 0xC0)),
    ("whitesmoke", Color::rgb(0xF5, 0xF5, 0xF5)),
    ("honeydew", Color::rgb(0xF0, 0xFF, 0xF0)),
    ("lightgreen", Color::rgb(0x90, 0xEE, 0x90)),
    ("lightyellow", Color::rgb(0xFF, 0xFF, 0xE0)),
];

/// A color as written in a CSS declaration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum CssColor {
    /// Hex notation (`#e8f5e9`)
    Hex(Color),
    /// A CSS keyword (`white`)
    Named(&'static str),
}

impl CssColor {
    /// Light green used while a post is hovered
    pub const HOVER_DEFAULT: CssColor = CssColor::Hex(Color::rgb(0xE8, 0xF5, 0xE9));
    /// Background restored when the pointer leaves a post
    pub const NEUTRAL_DEFAULT: CssColor = CssColor::Named("white");

    /// Parse a hex color or a supported color keyword
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.starts_with('#') {
            return Color::from_hex(s).map(CssColor::Hex);
        }
        NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(name, _)| CssColor::Named(name))
            .ok_or_else(|| format!("Unknown color: {}", s))
    }

    /// Text written into a `background-color` declaration
    pub fn css_text(&self) -> String {
        match self {
            CssColor::Hex(color) => color.to_hex(),
            CssColor::Named(name) => (*name).to_string(),
        }
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css_text())
    }
}

impl std::str::FromStr for CssColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CssColor::parse(s)
    }
}

impl TryFrom<String> for CssColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CssColor::parse(&value)
    }
}

// Keywords resolve to entries of NAMED_COLORS, so the value never borrows
// from the input.
impl<'de> Deserialize<'de> for CssColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        CssColor::parse(&text).map_err(serde::de::Error::custom)
    }
}

impl From<CssColor> for String {
    fn from(color: CssColor) -> Self {
        color.css_text()
    }
}
