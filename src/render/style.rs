use std::str::FromStr;

use crate::error::{Result, StyleError};
use crate::text::FontSpec;

/// Line widths at or below this are too thin to stroke glyph outlines.
pub const STROKE_MIN_WIDTH: f64 = 0.1;

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl FromStr for Color {
    type Err = StyleError;

    /// Parses any CSS color: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb()`,
    /// `rgba()`, `hsl()`, `hsla()` or a named color.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let color = svgtypes::Color::from_str(s.trim())
            .map_err(|_| StyleError::InvalidColor(s.to_owned()))?;
        Ok(Self {
            r: color.red,
            g: color.green,
            b: color.blue,
            a: color.alpha,
        })
    }
}

/// Vertical anchor of glyphs relative to their origin, with canvas
/// `textBaseline` semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

impl FromStr for TextBaseline {
    type Err = StyleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "hanging" => Ok(Self::Hanging),
            "middle" => Ok(Self::Middle),
            "alphabetic" => Ok(Self::Alphabetic),
            "ideographic" => Ok(Self::Ideographic),
            "bottom" => Ok(Self::Bottom),
            other => Err(StyleError::UnknownBaseline(other.to_owned())),
        }
    }
}

/// Paint attributes for text drawn along a path.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawStyle {
    pub font: FontSpec,
    pub stroke_color: Color,
    /// Outline width; glyphs are only stroked above [`STROKE_MIN_WIDTH`].
    pub line_width: f64,
    pub fill_color: Color,
    /// Global alpha in `[0, 1]`.
    pub alpha: f64,
    pub baseline: TextBaseline,
}

impl DrawStyle {
    /// Returns a copy with the given global alpha.
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha` is not within `[0, 1]`.
    pub fn with_alpha(mut self, alpha: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(StyleError::InvalidOpacity(alpha).into());
        }
        self.alpha = alpha;
        Ok(self)
    }

    /// Returns `true` if glyph outlines should be stroked before filling.
    #[must_use]
    pub fn strokes_glyphs(&self) -> bool {
        self.line_width > STROKE_MIN_WIDTH
    }
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            font: FontSpec::default(),
            stroke_color: Color::WHITE,
            line_width: 0.0,
            fill_color: Color::BLACK,
            alpha: 1.0,
            baseline: TextBaseline::default(),
        }
    }
}
