use std::str::FromStr;

use crate::error::StyleError;

/// The marker appended by [`Overflow::Ellipsis`].
pub const ELLIPSIS: &str = "\u{2026}";

/// What to do with text that is longer than its path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Drop trailing characters until the rest fits.
    #[default]
    Hidden,
    /// Draw everything. Glyphs that do not fit are placed on the last
    /// point of the path.
    Visible,
    /// Drop trailing characters and append `…`.
    Ellipsis,
    /// Drop trailing characters and append the given marker.
    Literal(String),
}

impl Overflow {
    /// Returns the marker appended after elision, or `None` when overflowing
    /// text is drawn in full.
    #[must_use]
    pub fn marker(&self) -> Option<&str> {
        match self {
            Self::Hidden => Some(""),
            Self::Visible => None,
            Self::Ellipsis => Some(ELLIPSIS),
            Self::Literal(marker) => Some(marker.as_str()),
        }
    }
}

impl From<&str> for Overflow {
    /// `""`/`"hidden"`, `"visible"` and `"ellipsis"` map to their variants;
    /// any other string is used literally as the marker.
    fn from(s: &str) -> Self {
        match s {
            "" | "hidden" => Self::Hidden,
            "visible" => Self::Visible,
            "ellipsis" => Self::Ellipsis,
            other => Self::Literal(other.to_owned()),
        }
    }
}

/// Horizontal text alignment, with canvas `textAlign` semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Left,
    Center,
    End,
    Right,
}

impl FromStr for TextAlign {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            "right" => Ok(Self::Right),
            other => Err(StyleError::UnknownAlign(other.to_owned())),
        }
    }
}

/// Options controlling how text is fitted onto a path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutOptions {
    /// Policy for text longer than the path.
    pub overflow: Overflow,
    /// Stretch letter spacing so the text spans the whole path.
    /// Takes precedence over `align`.
    pub justify: bool,
    /// Where unjustified text sits along the path.
    pub align: TextAlign,
    /// Paths shorter than this get no text at all.
    pub min_path_length: f64,
    /// Lay text along the reversed path when the path runs right to left,
    /// so glyphs are never upside down.
    pub keep_upright: bool,
}
