//! Text laid out along polylines, for labelling map lines with their names.
//!
//! ```text
//! points ─▶ geometry::Path ─▶ layout::TextPathLayout ─▶ render::render_glyphs ─▶ Canvas
//!              (dedup)          (elide, justify,           (save, translate,
//!                                sample per glyph)          rotate, stroke, fill)
//! ```
//!
//! [`render::DrawTextPath`] runs the whole pipeline against a [`render::Canvas`];
//! [`overlay::TextPathLine`] adds the map-line glue on top.

pub mod error;
pub mod geometry;
pub mod layout;
pub mod math;
pub mod overlay;
pub mod render;
pub mod text;

pub use error::{Result, TextPathError};
