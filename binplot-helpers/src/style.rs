//! Plot style vocabulary: colors, markers, line styles and the compact
//! `"[color][marker][line]"` format strings (`"go"`, `"r--"`, `"k-o"`).

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Errors that can occur while parsing a style description.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleError {
    /// The color name or code is not one of the known colors.
    UnknownColor(String),
    /// The line style is not one of `-`, `--`, `-.`, `:` or their names.
    UnknownLineStyle(String),
    /// The format string contains a character that is neither a color, a marker nor a line style.
    UnrecognizedFormat(String),
    /// The format string names the same component twice (e.g. two colors).
    DuplicateComponent(String),
}

impl Display for StyleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::UnknownColor(c) => write!(f, "Unknown color: '{}'", c),
            StyleError::UnknownLineStyle(s) => write!(f, "Unknown line style: '{}'", s),
            StyleError::UnrecognizedFormat(s) => {
                write!(f, "Unrecognized character in format string '{}'", s)
            }
            StyleError::DuplicateComponent(s) => {
                write!(f, "Format string '{}' specifies a component more than once", s)
            }
        }
    }
}

impl Error for StyleError {}

/// The eight single-letter colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Color {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
}

impl Color {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'b' => Some(Color::Blue),
            'g' => Some(Color::Green),
            'r' => Some(Color::Red),
            'c' => Some(Color::Cyan),
            'm' => Some(Color::Magenta),
            'y' => Some(Color::Yellow),
            'k' => Some(Color::Black),
            'w' => Some(Color::White),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Color::Blue => 'b',
            Color::Green => 'g',
            Color::Red => 'r',
            Color::Cyan => 'c',
            Color::Magenta => 'm',
            Color::Yellow => 'y',
            Color::Black => 'k',
            Color::White => 'w',
        }
    }

    /// RGB triple, matching the usual rendering of the letter codes.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Blue => (0, 0, 255),
            Color::Green => (0, 128, 0),
            Color::Red => (255, 0, 0),
            Color::Cyan => (0, 191, 191),
            Color::Magenta => (191, 0, 191),
            Color::Yellow => (191, 191, 0),
            Color::Black => (0, 0, 0),
            Color::White => (255, 255, 255),
        }
    }
}

impl FromStr for Color {
    type Err = StyleError;

    /// Accepts a letter code (`"k"`) or a full name (`"black"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(color) = Color::from_code(c) {
                return Ok(color);
            }
        }
        match s.to_ascii_lowercase().as_str() {
            "blue" => Ok(Color::Blue),
            "green" => Ok(Color::Green),
            "red" => Ok(Color::Red),
            "cyan" => Ok(Color::Cyan),
            "magenta" => Ok(Color::Magenta),
            "yellow" => Ok(Color::Yellow),
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            _ => Err(StyleError::UnknownColor(s.to_string())),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Marker shapes drawn at each data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Marker {
    Point,
    Circle,
    Square,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    Diamond,
    ThinDiamond,
    Cross,
    Plus,
    Star,
}

impl Marker {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '.' => Some(Marker::Point),
            'o' => Some(Marker::Circle),
            's' => Some(Marker::Square),
            '^' => Some(Marker::TriangleUp),
            'v' => Some(Marker::TriangleDown),
            '<' => Some(Marker::TriangleLeft),
            '>' => Some(Marker::TriangleRight),
            'D' => Some(Marker::Diamond),
            'd' => Some(Marker::ThinDiamond),
            'x' => Some(Marker::Cross),
            '+' => Some(Marker::Plus),
            '*' => Some(Marker::Star),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Marker::Point => '.',
            Marker::Circle => 'o',
            Marker::Square => 's',
            Marker::TriangleUp => '^',
            Marker::TriangleDown => 'v',
            Marker::TriangleLeft => '<',
            Marker::TriangleRight => '>',
            Marker::Diamond => 'D',
            Marker::ThinDiamond => 'd',
            Marker::Cross => 'x',
            Marker::Plus => '+',
            Marker::Star => '*',
        }
    }
}

/// How the segments between consecutive points are stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

impl LineStyle {
    /// Matches a line-style token at the start of `s`, longest token first,
    /// returning the style and the number of bytes consumed.
    fn from_prefix(s: &str) -> Option<(Self, usize)> {
        if s.starts_with("--") {
            Some((LineStyle::Dashed, 2))
        } else if s.starts_with("-.") {
            Some((LineStyle::DashDot, 2))
        } else if s.starts_with('-') {
            Some((LineStyle::Solid, 1))
        } else if s.starts_with(':') {
            Some((LineStyle::Dotted, 1))
        } else {
            None
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            LineStyle::Solid => "-",
            LineStyle::Dashed => "--",
            LineStyle::DashDot => "-.",
            LineStyle::Dotted => ":",
        }
    }
}

impl FromStr for LineStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" | "solid" => Ok(LineStyle::Solid),
            "--" | "dashed" => Ok(LineStyle::Dashed),
            "-." | "dashdot" => Ok(LineStyle::DashDot),
            ":" | "dotted" => Ok(LineStyle::Dotted),
            _ => Err(StyleError::UnknownLineStyle(s.to_string())),
        }
    }
}

impl Display for LineStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A parsed `"[color][marker][line]"` format string.
///
/// The components may appear in any order and each at most once. With
/// neither a marker nor a line style the points are joined by a solid line;
/// without a color the series is blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatString {
    pub color: Color,
    pub marker: Option<Marker>,
    pub line: Option<LineStyle>,
}

impl FormatString {
    /// A plain connecting line with no markers.
    pub fn line(style: LineStyle, color: Color) -> Self {
        FormatString {
            color,
            marker: None,
            line: Some(style),
        }
    }
}

impl FromStr for FormatString {
    type Err = StyleError;

    fn from_str(fmt: &str) -> Result<Self, Self::Err> {
        let mut color = None;
        let mut marker = None;
        let mut line = None;

        let duplicate = || StyleError::DuplicateComponent(fmt.to_string());

        let mut rest = fmt;
        while let Some(c) = rest.chars().next() {
            if let Some((style, len)) = LineStyle::from_prefix(rest) {
                if line.replace(style).is_some() {
                    return Err(duplicate());
                }
                rest = &rest[len..];
                continue;
            }

            if let Some(col) = Color::from_code(c) {
                if color.replace(col).is_some() {
                    return Err(duplicate());
                }
            } else if let Some(m) = Marker::from_code(c) {
                if marker.replace(m).is_some() {
                    return Err(duplicate());
                }
            } else {
                return Err(StyleError::UnrecognizedFormat(fmt.to_string()));
            }
            rest = &rest[c.len_utf8()..];
        }

        if marker.is_none() && line.is_none() {
            line = Some(LineStyle::Solid);
        }

        Ok(FormatString {
            color: color.unwrap_or(Color::Blue),
            marker,
            line,
        })
    }
}

impl Display for FormatString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)?;
        if let Some(marker) = self.marker {
            write!(f, "{}", marker.code())?;
        }
        if let Some(line) = self.line {
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
