use crate::geometry::dedup_adjacent;
use crate::math::Point2;
use crate::render::{Canvas, CanvasScope, DrawStyle, DrawTextPath};
use crate::text::FontSpec;

use super::{LineSymbol, TextPathSymbol};

/// Line width used for glyph outlines when the line symbol has none.
const DEFAULT_TEXT_LINE_WIDTH: f64 = 3.0;

/// What a [`TextPathLine::paint`] call drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Painted {
    /// The line was stroked as a polyline.
    Line,
    /// The label was drawn along the line.
    Text { glyphs: usize },
    /// Nothing was drawn.
    Nothing,
}

/// A map line that draws its label along its own geometry.
///
/// Without a label it paints like a plain polyline; with one it hands the
/// screen points to the text path renderer instead.
#[derive(Debug, Clone, Default)]
pub struct TextPathLine {
    line: LineSymbol,
    text: Option<String>,
    text_symbol: TextPathSymbol,
}

impl TextPathLine {
    /// Creates an unlabeled line.
    #[must_use]
    pub fn new(line: LineSymbol) -> Self {
        Self {
            line,
            text: None,
            text_symbol: TextPathSymbol::default(),
        }
    }

    /// Attaches a label drawn with `symbol`.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>, symbol: TextPathSymbol) -> Self {
        self.text = Some(text.into());
        self.text_symbol = symbol;
        self
    }

    /// Returns the label if this line should be painted as text.
    #[must_use]
    pub fn text_capability(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn line_symbol(&self) -> &LineSymbol {
        &self.line
    }

    #[must_use]
    pub fn text_symbol(&self) -> &TextPathSymbol {
        &self.text_symbol
    }

    /// Paints the line onto `canvas`.
    ///
    /// `points` are the line's vertices in screen space; `map_scale` is the
    /// number of map meters per screen pixel, used for meter font sizes.
    pub fn paint<C>(&self, canvas: &mut C, mut points: Vec<Point2>, map_scale: f64) -> Painted
    where
        C: Canvas + ?Sized,
    {
        dedup_adjacent(&mut points);
        match self.text_capability() {
            Some(text) => self.paint_text(canvas, text, &points, map_scale),
            None => self.paint_line(canvas, &points),
        }
    }

    fn paint_text<C>(&self, canvas: &mut C, text: &str, points: &[Point2], map_scale: f64) -> Painted
    where
        C: Canvas + ?Sized,
    {
        let symbol = &self.text_symbol;
        let Some(size_px) = symbol.font_size.to_pixels(map_scale) else {
            tracing::warn!(map_scale, font_size = %symbol.font_size, "cannot resolve label font size");
            return Painted::Nothing;
        };

        let line_width = if self.line.width() > 0.0 {
            self.line.width()
        } else {
            DEFAULT_TEXT_LINE_WIDTH
        };
        let style = DrawStyle {
            font: FontSpec::new(size_px, symbol.font_family.clone()),
            stroke_color: self.line.color(),
            line_width,
            fill_color: symbol.fill_color,
            baseline: symbol.baseline,
            ..DrawStyle::default()
        };
        let style = match style.with_alpha(self.line.opacity()) {
            Ok(style) => style,
            Err(err) => {
                tracing::warn!(%err, "invalid label style");
                return Painted::Nothing;
            }
        };

        let options = symbol.layout_options();
        let glyphs = DrawTextPath::new(text, points, &style, &options).execute(canvas);
        if glyphs == 0 {
            Painted::Nothing
        } else {
            Painted::Text { glyphs }
        }
    }

    fn paint_line<C>(&self, canvas: &mut C, points: &[Point2]) -> Painted
    where
        C: Canvas + ?Sized,
    {
        let [first, rest @ ..] = points else {
            return Painted::Nothing;
        };
        if rest.is_empty() {
            return Painted::Nothing;
        }

        let mut scope = CanvasScope::new(canvas);
        scope.set_stroke_color(self.line.color());
        scope.set_line_width(self.line.width());
        scope.set_global_alpha(self.line.opacity());
        scope.begin_path();
        scope.move_to(*first);
        for p in rest {
            scope.line_to(*p);
        }
        scope.stroke();
        Painted::Line
    }
}
