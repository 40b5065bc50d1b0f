use crate::geometry::Path;
use crate::layout::{LayoutOptions, TextAlign, TextLayout, TextPathLayout};
use crate::math::Point2;

use super::{Canvas, CanvasScope, DrawStyle};

/// Draws laid-out glyphs, each under its own save/restore scope.
///
/// Every glyph is centered on its placement and rotated to the path
/// tangent; it is stroked first when the style asks for outlines, then
/// filled. Returns the number of glyphs drawn.
pub fn render_glyphs<C>(canvas: &mut C, layout: &TextLayout, style: &DrawStyle) -> usize
where
    C: Canvas + ?Sized,
{
    let stroke = style.strokes_glyphs();
    let mut buf = [0u8; 4];
    for glyph in &layout.glyphs {
        let mut scope = CanvasScope::new(&mut *canvas);
        scope.set_text_align(TextAlign::Center);
        scope.translate(glyph.position.coords);
        scope.rotate(glyph.rotation);

        let letter = glyph.character.encode_utf8(&mut buf);
        if stroke {
            scope.stroke_text(letter, Point2::origin());
        }
        scope.fill_text(letter, Point2::origin());
    }
    layout.glyphs.len()
}

/// Lays out and draws a string along a polyline.
///
/// The canvas state is saved before the style is applied and restored on
/// every exit path, so the caller's attributes and transform are untouched.
/// Degenerate input (empty text, fewer than 2 distinct points, a path
/// shorter than the minimum length) draws nothing.
#[derive(Debug)]
pub struct DrawTextPath<'a> {
    text: &'a str,
    points: &'a [Point2],
    style: &'a DrawStyle,
    options: &'a LayoutOptions,
}

impl<'a> DrawTextPath<'a> {
    /// Creates a new draw operation.
    #[must_use]
    pub fn new(
        text: &'a str,
        points: &'a [Point2],
        style: &'a DrawStyle,
        options: &'a LayoutOptions,
    ) -> Self {
        Self {
            text,
            points,
            style,
            options,
        }
    }

    /// Executes the draw, returning the number of glyphs drawn.
    pub fn execute<C>(&self, canvas: &mut C) -> usize
    where
        C: Canvas + ?Sized,
    {
        let mut scope = CanvasScope::new(canvas);
        scope.apply_style(self.style);

        let path = match Path::new(self.points.to_vec()) {
            Ok(path) => path,
            Err(err) => {
                tracing::debug!(%err, "skipping text path");
                return 0;
            }
        };

        let Some(layout) = TextPathLayout::new(self.text, self.options).execute(&path, &*scope)
        else {
            return 0;
        };
        render_glyphs(&mut *scope, &layout, self.style)
    }
}
