// SPDX-License-Identifier: MIT OR Apache-2.0

//! Graphics value types parsed from comma-separated property values.
//!
//! Every type here implements `FromStr`, so [`PropValue::parse`] turns it into
//! a typed accessor. Component counts and ranges are checked before a value is
//! built; a partially valid value is never constructed.
//!
//! [`PropValue::parse`]: crate::domain::PropValue::parse

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

const SEPARATOR: char = ',';

/// Error produced when a graphics value cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphicsParseError {
    /// The value had the wrong number of comma-separated components.
    #[error("expected {expected} comma-separated components, found {found}")]
    ComponentCount {
        /// Number of components the type needs
        expected: usize,
        /// Number of components present
        found: usize,
    },

    /// A component was not an integer.
    #[error("component {index} (\"{text}\") is not an integer: {source}")]
    InvalidNumber {
        /// 0-based component index
        index: usize,
        /// The component text after trimming
        text: String,
        /// The integer parse error
        source: ParseIntError,
    },

    /// A component was an integer outside its allowed range.
    #[error("component {index} ({value}) is outside {min}..={max}")]
    OutOfRange {
        /// 0-based component index
        index: usize,
        /// The parsed value
        value: i64,
        /// Smallest allowed value
        min: i64,
        /// Largest allowed value
        max: i64,
    },

    /// A font style keyword was not recognised.
    #[error("unknown font style \"{0}\"")]
    UnknownFontStyle(String),

    /// A font family name was empty.
    #[error("font family is empty")]
    EmptyFamily,
}

/// Splits `raw` on commas and checks the component count.
fn components(raw: &str, expected: usize) -> Result<Vec<&str>, GraphicsParseError> {
    let parts: Vec<&str> = raw.split(SEPARATOR).map(str::trim).collect();
    if parts.len() != expected {
        return Err(GraphicsParseError::ComponentCount {
            expected,
            found: parts.len(),
        });
    }
    Ok(parts)
}

/// Parses component `index` as an integer within `min..=max`.
fn ranged(parts: &[&str], index: usize, min: i64, max: i64) -> Result<i64, GraphicsParseError> {
    let text = parts[index];
    let value = text
        .parse::<i64>()
        .map_err(|source| GraphicsParseError::InvalidNumber {
            index,
            text: text.to_string(),
            source,
        })?;
    if !(min..=max).contains(&value) {
        return Err(GraphicsParseError::OutOfRange {
            index,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// An opaque RGB color.
///
/// Written as `r,g,b` with each channel in `0..=255`.
///
/// # Examples
///
/// ```
/// use typedprops::domain::Color;
///
/// let color: Color = "100, 20, 250".parse().unwrap();
/// assert_eq!(color, Color::new(100, 20, 250));
/// assert!("100,20".parse::<Color>().is_err());
/// assert!("100,20,256".parse::<Color>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Creates a color from its channels.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl FromStr for Color {
    type Err = GraphicsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = components(s, 3)?;
        let channel = |index| ranged(&parts, index, 0, 255).map(|v| v as u8);
        Ok(Color::new(channel(0)?, channel(1)?, channel(2)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// A point in integer coordinate space, written as `x,y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl FromStr for Point {
    type Err = GraphicsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = components(s, 2)?;
        let coord = |index| ranged(&parts, index, i32::MIN.into(), i32::MAX.into());
        Ok(Point::new(coord(0)? as i32, coord(1)? as i32))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A width and height, written as `width,height`. Both must be non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// Horizontal extent
    pub width: u32,
    /// Vertical extent
    pub height: u32,
}

impl Dimension {
    /// Creates a dimension.
    pub fn new(width: u32, height: u32) -> Self {
        Dimension { width, height }
    }
}

impl FromStr for Dimension {
    type Err = GraphicsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = components(s, 2)?;
        let extent = |index| ranged(&parts, index, 0, u32::MAX.into()).map(|v| v as u32);
        Ok(Dimension::new(extent(0)?, extent(1)?))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.width, self.height)
    }
}

/// Font style keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    /// Regular weight, upright
    Plain,
    /// Bold weight
    Bold,
    /// Slanted
    Italic,
    /// Bold and slanted
    BoldItalic,
}

impl FromStr for FontStyle {
    type Err = GraphicsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PLAIN" => Ok(FontStyle::Plain),
            "BOLD" => Ok(FontStyle::Bold),
            "ITALIC" => Ok(FontStyle::Italic),
            "BOLD_ITALIC" | "BOLDITALIC" => Ok(FontStyle::BoldItalic),
            _ => Err(GraphicsParseError::UnknownFontStyle(s.to_string())),
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            FontStyle::Plain => "PLAIN",
            FontStyle::Bold => "BOLD",
            FontStyle::Italic => "ITALIC",
            FontStyle::BoldItalic => "BOLD_ITALIC",
        };
        f.write_str(keyword)
    }
}

/// A font descriptor, written as `family,style,size`.
///
/// The family is never empty and the size is at least 1. Every way of
/// building a `Font`, deserialization included, checks both.
///
/// # Examples
///
/// ```
/// use typedprops::domain::{Font, FontStyle};
///
/// let font: Font = "Dialog,BOLD,12".parse().unwrap();
/// assert_eq!(font, Font::new("Dialog", FontStyle::Bold, 12).unwrap());
/// assert!(Font::new("Dialog", FontStyle::Bold, 0).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Font {
    family: String,
    style: FontStyle,
    size: u32,
}

impl Font {
    /// Creates a font descriptor.
    ///
    /// # Errors
    ///
    /// `EmptyFamily` for an empty family name, `OutOfRange` for a zero size.
    pub fn new(
        family: impl Into<String>,
        style: FontStyle,
        size: u32,
    ) -> Result<Self, GraphicsParseError> {
        let family = family.into();
        if family.is_empty() {
            return Err(GraphicsParseError::EmptyFamily);
        }
        if size == 0 {
            return Err(GraphicsParseError::OutOfRange {
                index: 2,
                value: 0,
                min: 1,
                max: u32::MAX.into(),
            });
        }
        Ok(Font {
            family,
            style,
            size,
        })
    }

    /// Family name, such as `Dialog` or `Serif`.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Style keyword.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Point size.
    pub fn size(&self) -> u32 {
        self.size
    }
}

impl FromStr for Font {
    type Err = GraphicsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = components(s, 3)?;
        let style = parts[1].parse::<FontStyle>()?;
        let size = ranged(&parts, 2, 1, u32::MAX.into())? as u32;
        Font::new(parts[0], style, size)
    }
}

impl TryFrom<String> for Font {
    type Error = GraphicsParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Font> for String {
    fn from(font: Font) -> Self {
        font.to_string()
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.family, self.style, self.size)
    }
}
