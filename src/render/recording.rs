use crate::layout::TextAlign;
use crate::math::{Isometry2, Point2, Vector2};
use crate::text::{FontSpec, TextMeasure};

use super::{Canvas, Color, TextBaseline};

/// Transform and paint attributes saved and restored by the canvas stack.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub transform: Isometry2,
    pub font: FontSpec,
    pub stroke_color: Color,
    pub line_width: f64,
    pub fill_color: Color,
    pub alpha: f64,
    pub text_align: TextAlign,
    pub baseline: TextBaseline,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Isometry2::identity(),
            font: FontSpec::default(),
            stroke_color: Color::BLACK,
            line_width: 0.0,
            fill_color: Color::BLACK,
            alpha: 1.0,
            text_align: TextAlign::Start,
            baseline: TextBaseline::Alphabetic,
        }
    }
}

/// A text draw, resolved to device space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub text: String,
    /// Text origin after applying the current transform.
    pub position: Point2,
    /// Accumulated rotation of the current transform, in radians.
    pub rotation: f64,
    pub font: FontSpec,
    /// Stroke color for [`DrawCommand::StrokeText`], fill color otherwise.
    pub color: Color,
    pub line_width: f64,
    pub alpha: f64,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    StrokeText(TextCommand),
    FillText(TextCommand),
    StrokePath {
        /// Vertices in device space.
        points: Vec<Point2>,
        color: Color,
        width: f64,
        alpha: f64,
    },
}

/// A [`Canvas`] that records draw calls into a display list.
///
/// Glyph advances come from `M` in em units and are scaled by the current
/// font size, so one measurer serves every font size.
#[derive(Debug, Clone)]
pub struct RecordingCanvas<M> {
    measure: M,
    state: DrawState,
    stack: Vec<DrawState>,
    path: Vec<Point2>,
    commands: Vec<DrawCommand>,
}

impl<M: TextMeasure> RecordingCanvas<M> {
    /// Creates an empty canvas with default state.
    #[must_use]
    pub fn new(measure: M) -> Self {
        Self {
            measure,
            state: DrawState::default(),
            stack: Vec::new(),
            path: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Returns the current (unsaved) state.
    #[must_use]
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// Returns the number of states currently saved.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns the recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    fn text_command(&self, text: &str, at: Point2, color: Color) -> TextCommand {
        TextCommand {
            text: text.to_owned(),
            position: self.state.transform * at,
            rotation: self.state.transform.rotation.angle(),
            font: self.state.font.clone(),
            color,
            line_width: self.state.line_width,
            alpha: self.state.alpha,
            align: self.state.text_align,
            baseline: self.state.baseline,
        }
    }
}

impl<M: TextMeasure> TextMeasure for RecordingCanvas<M> {
    fn text_width(&self, text: &str) -> f64 {
        self.measure.text_width(text) * self.state.font.size_px
    }
}

impl<M: TextMeasure> Canvas for RecordingCanvas<M> {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => tracing::warn!("restore without matching save ignored"),
        }
    }

    fn translate(&mut self, offset: Vector2) {
        self.state.transform *= Isometry2::translation(offset.x, offset.y);
    }

    fn rotate(&mut self, angle: f64) {
        self.state.transform *= Isometry2::rotation(angle);
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.state.font = font.clone();
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color;
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.baseline = baseline;
    }

    fn stroke_text(&mut self, text: &str, at: Point2) {
        let cmd = self.text_command(text, at, self.state.stroke_color);
        self.commands.push(DrawCommand::StrokeText(cmd));
    }

    fn fill_text(&mut self, text: &str, at: Point2) {
        let cmd = self.text_command(text, at, self.state.fill_color);
        self.commands.push(DrawCommand::FillText(cmd));
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, to: Point2) {
        self.path.clear();
        self.path.push(self.state.transform * to);
    }

    fn line_to(&mut self, to: Point2) {
        self.path.push(self.state.transform * to);
    }

    fn stroke(&mut self) {
        if self.path.len() < 2 {
            return;
        }
        self.commands.push(DrawCommand::StrokePath {
            points: self.path.clone(),
            color: self.state.stroke_color,
            width: self.state.line_width,
            alpha: self.state.alpha,
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::text::FixedAdvance;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn measures_in_em_scaled_by_font() {
        let mut canvas = RecordingCanvas::new(FixedAdvance(0.5));
        canvas.set_font(&FontSpec::new(20.0, "Arial"));
        assert!((canvas.text_width("abc") - 30.0).abs() < 1e-12);
    }

    #[test]
    fn translate_then_rotate_maps_origin_and_axis() {
        let mut canvas = RecordingCanvas::new(FixedAdvance(0.5));
        canvas.translate(Vector2::new(10.0, 5.0));
        canvas.rotate(FRAC_PI_2);
        canvas.fill_text("a", Point2::new(2.0, 0.0));

        let DrawCommand::FillText(cmd) = &canvas.commands()[0] else {
            panic!("expected fill");
        };
        assert_relative_eq!(cmd.position, Point2::new(10.0, 7.0), epsilon = 1e-12);
        assert_relative_eq!(cmd.rotation, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn restore_brings_back_transform_and_paint() {
        let mut canvas = RecordingCanvas::new(FixedAdvance(0.5));
        canvas.save();
        canvas.translate(Vector2::new(3.0, 4.0));
        canvas.set_fill_color(Color::WHITE);
        canvas.restore();
        assert_eq!(canvas.state(), &DrawState::default());
    }

    #[test]
    fn unbalanced_restore_is_ignored() {
        let mut canvas = RecordingCanvas::new(FixedAdvance(0.5));
        canvas.set_line_width(2.0);
        canvas.restore();
        assert_eq!(canvas.depth(), 0);
        assert!((canvas.state().line_width - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn strokes_polyline() {
        let mut canvas = RecordingCanvas::new(FixedAdvance(0.5));
        canvas.set_line_width(3.0);
        canvas.begin_path();
        canvas.move_to(Point2::new(0.0, 0.0));
        canvas.line_to(Point2::new(5.0, 0.0));
        canvas.stroke();

        let cmds = canvas.take_commands();
        assert_eq!(cmds.len(), 1);
        assert!(matches!(
            &cmds[0],
            DrawCommand::StrokePath { points, width, .. } if points.len() == 2 && (*width - 3.0).abs() < f64::EPSILON
        ));
        assert!(canvas.commands().is_empty());
    }
}
