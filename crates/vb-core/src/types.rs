//! Common types used across vb-console

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

/// ANSI reset sequence closing any open color span
pub const RESET: &str = "\x1b[0m";

/// Terminal colors understood by the console.
///
/// The set is closed: names map to the indices 0-8 and nothing else is
/// accepted. `Default` maps to index 8, so its escape is `ESC[38m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Default,
}

impl Color {
    /// Every color in table order
    pub const ALL: [Color; 9] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Default,
    ];

    /// Terminal color index
    pub fn index(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
            Color::Default => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Default => "default",
        }
    }

    /// Escape sequence opening a span in this color
    pub fn open(self) -> String {
        format!("\x1b[3{}m", self.index())
    }

    /// Wrap `text` in this color, terminated by a reset
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.open(), text, RESET)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::UnknownColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Key/value colors used for mapping output in colored mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirColors {
    #[serde(default = "DirColors::default_keys")]
    pub keys: Color,
    #[serde(default = "DirColors::default_values")]
    pub values: Color,
}

impl DirColors {
    fn default_keys() -> Color {
        Color::Yellow
    }

    fn default_values() -> Color {
        Color::Default
    }
}

impl Default for DirColors {
    fn default() -> Self {
        Self {
            keys: Self::default_keys(),
            values: Self::default_values(),
        }
    }
}

/// Kind of a plain value stored at class level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Integer,
    String,
    Sequence,
    Mapping,
    Set,
}

/// Descriptor kind of a class-level member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Property,
    StaticMethod,
    ClassMethod,
    Method,
    Value(ValueKind),
    /// Anything else (floats, nested types, foreign descriptors)
    Opaque,
}

/// Buckets of an inspection payload, in the order they are collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    InternalMethods,
    PrivateMethods,
    PublicAttributes,
    DataAttributes,
    Properties,
    StaticMethods,
    ClassMethods,
    Methods,
    ClassVariables,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::InternalMethods,
        Category::PrivateMethods,
        Category::PublicAttributes,
        Category::DataAttributes,
        Category::Properties,
        Category::StaticMethods,
        Category::ClassMethods,
        Category::Methods,
        Category::ClassVariables,
    ];

    /// Payload key
    pub fn key(self) -> &'static str {
        match self {
            Category::InternalMethods => "internal_methods",
            Category::PrivateMethods => "private_methods",
            Category::PublicAttributes => "public_attributes",
            Category::DataAttributes => "data_attributes",
            Category::Properties => "properties",
            Category::StaticMethods => "static_methods",
            Category::ClassMethods => "class_methods",
            Category::Methods => "methods",
            Category::ClassVariables => "class_variables",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
