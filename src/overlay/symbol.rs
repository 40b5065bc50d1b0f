use crate::error::{Result, StyleError};
use crate::layout::{LayoutOptions, Overflow, TextAlign};
use crate::render::{Color, TextBaseline};
use crate::text::FontSize;

/// Paint attributes of the line geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSymbol {
    color: Color,
    width: f64,
    opacity: f64,
}

impl LineSymbol {
    /// Creates a new line symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if `opacity` is outside `[0, 1]` or `width` is
    /// negative.
    pub fn new(color: Color, width: f64, opacity: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(StyleError::InvalidOpacity(opacity).into());
        }
        if width.is_nan() || width < 0.0 {
            return Err(StyleError::InvalidLineWidth(width).into());
        }
        Ok(Self {
            color,
            width,
            opacity,
        })
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }
}

impl Default for LineSymbol {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 2.0,
            opacity: 1.0,
        }
    }
}

/// Text attributes of a line that carries a label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPathSymbol {
    pub font_size: FontSize,
    pub font_family: String,
    pub fill_color: Color,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub overflow: Overflow,
    pub justify: bool,
    /// Screen length below which the label is not drawn.
    pub min_path_length: f64,
    pub keep_upright: bool,
}

impl TextPathSymbol {
    /// Returns the layout options this symbol describes.
    #[must_use]
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            overflow: self.overflow.clone(),
            justify: self.justify,
            align: self.align,
            min_path_length: self.min_path_length,
            keep_upright: self.keep_upright,
        }
    }
}

impl Default for TextPathSymbol {
    fn default() -> Self {
        Self {
            font_size: FontSize::Pixels(48.0),
            font_family: "Arial".to_owned(),
            fill_color: Color::BLACK,
            align: TextAlign::Start,
            baseline: TextBaseline::Middle,
            overflow: Overflow::Visible,
            justify: true,
            min_path_length: 20.0,
            keep_upright: false,
        }
    }
}
