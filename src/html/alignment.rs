//! Table alignment values (`align` and `valign` attributes)

use super::attr::AttributeEnum;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Horizontal alignment of cell content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical alignment of cell content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Top,
    Middle,
    Bottom,
    Baseline,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown alignment value: {0:?}")]
pub struct ParseAlignmentError(pub String);

impl AttributeEnum for HorizontalAlignment {
    const MEMBERS: &'static [Self] = &[
        HorizontalAlignment::Left,
        HorizontalAlignment::Center,
        HorizontalAlignment::Right,
        HorizontalAlignment::Justify,
    ];

    /// Canonical lowercase attribute form, e.g. `"center"`
    fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
            HorizontalAlignment::Justify => "justify",
        }
    }
}

impl AttributeEnum for VerticalAlignment {
    const MEMBERS: &'static [Self] = &[
        VerticalAlignment::Top,
        VerticalAlignment::Middle,
        VerticalAlignment::Bottom,
        VerticalAlignment::Baseline,
    ];

    /// Canonical lowercase attribute form, e.g. `"middle"`
    fn as_str(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Middle => "middle",
            VerticalAlignment::Bottom => "bottom",
            VerticalAlignment::Baseline => "baseline",
        }
    }
}

impl fmt::Display for HorizontalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HorizontalAlignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_attribute(s).ok_or_else(|| ParseAlignmentError(s.to_string()))
    }
}

impl FromStr for VerticalAlignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_attribute(s).ok_or_else(|| ParseAlignmentError(s.to_string()))
    }
}
