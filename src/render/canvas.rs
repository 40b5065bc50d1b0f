use std::ops::{Deref, DerefMut};

use crate::layout::TextAlign;
use crate::math::{Point2, Vector2};
use crate::text::{FontSpec, TextMeasure};

use super::{Color, DrawStyle, TextBaseline};

/// A 2D drawing surface with a save/restore state stack.
///
/// Mirrors the subset of an HTML canvas context the text renderer needs.
/// `save` pushes the current transform and paint attributes, `restore`
/// pops them. Transforms compose onto the current one.
pub trait Canvas: TextMeasure {
    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, offset: Vector2);
    /// Rotates by `angle` radians.
    fn rotate(&mut self, angle: f64);

    fn set_font(&mut self, font: &FontSpec);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_fill_color(&mut self, color: Color);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn stroke_text(&mut self, text: &str, at: Point2);
    fn fill_text(&mut self, text: &str, at: Point2);

    fn begin_path(&mut self);
    fn move_to(&mut self, to: Point2);
    fn line_to(&mut self, to: Point2);
    /// Strokes the current path with the current stroke color and width.
    fn stroke(&mut self);

    /// Applies every attribute of `style`.
    fn apply_style(&mut self, style: &DrawStyle) {
        self.set_font(&style.font);
        self.set_stroke_color(style.stroke_color);
        self.set_line_width(style.line_width);
        self.set_fill_color(style.fill_color);
        self.set_global_alpha(style.alpha);
        self.set_text_baseline(style.baseline);
    }
}

/// Saves canvas state on creation and restores it on drop.
///
/// Derefs to the canvas, so drawing goes through the scope. Every exit
/// path out of the scope, early returns included, restores exactly once.
pub struct CanvasScope<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> CanvasScope<'a, C> {
    #[must_use]
    pub fn new(canvas: &'a mut C) -> Self {
        canvas.save();
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for CanvasScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for CanvasScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for CanvasScope<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingCanvas;
    use crate::text::FixedAdvance;

    #[test]
    fn scope_restores_on_drop() {
        let mut canvas = RecordingCanvas::new(FixedAdvance(0.5));
        {
            let mut scope = CanvasScope::new(&mut canvas);
            scope.set_line_width(7.0);
            assert_eq!(scope.depth(), 1);
        }
        assert_eq!(canvas.depth(), 0);
        assert!(canvas.state().line_width.abs() < f64::EPSILON);
    }

    #[test]
    fn nested_scopes_unwind_in_order() {
        let mut canvas = RecordingCanvas::new(FixedAdvance(0.5));
        {
            let mut outer = CanvasScope::new(&mut canvas);
            outer.set_global_alpha(0.5);
            {
                let mut inner = CanvasScope::new(&mut *outer);
                inner.set_global_alpha(0.25);
                assert_eq!(inner.depth(), 2);
            }
            assert!((outer.state().alpha - 0.5).abs() < f64::EPSILON);
        }
        assert!((canvas.state().alpha - 1.0).abs() < f64::EPSILON);
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn scope_restores_on_early_return() {
        fn bail(canvas: &mut RecordingCanvas<FixedAdvance>, stop: bool) -> usize {
            let mut scope = CanvasScope::new(canvas);
            scope.set_line_width(4.0);
            if stop {
                return 0;
            }
            scope.fill_text("x", Point2::origin());
            1
        }

        let mut canvas = RecordingCanvas::new(FixedAdvance(0.5));
        assert_eq!(bail(&mut canvas, true), 0);
        assert_eq!(canvas.depth(), 0);
        assert_eq!(bail(&mut canvas, false), 1);
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.commands().len(), 1);
    }
}
