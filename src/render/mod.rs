mod canvas;
mod draw;
mod recording;
mod style;

pub use canvas::{Canvas, CanvasScope};
pub use draw::{render_glyphs, DrawTextPath};
pub use recording::{DrawCommand, DrawState, RecordingCanvas, TextCommand};
pub use style::{Color, DrawStyle, TextBaseline, STROKE_MIN_WIDTH};
