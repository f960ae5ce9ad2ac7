//! Shape and color tags.
//!
//! - `Shape`: discriminator fixed by each figure variant.
//! - `Color`: caller-supplied tag, stored verbatim.
//!
//! Both render lowercase through `Display`, which is the form `info` uses.

use std::fmt;
use std::str::FromStr;

/// Which geometric variant a figure is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Triangle,
    Circle,
    Rectangle,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Triangle, Shape::Circle, Shape::Rectangle];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Triangle => "triangle",
            Shape::Circle => "circle",
            Shape::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color tag of a figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `Color::from_str` for names outside `red | green | blue`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseColorError {
    pub input: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown color {:?} (expected one of: red, green, blue)",
            self.input
        )
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Color::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseColorError {
                input: s.to_string(),
            })
    }
}
