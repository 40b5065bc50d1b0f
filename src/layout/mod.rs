mod elide;
mod options;
mod planner;

pub use elide::{elide, Elision};
pub use options::{LayoutOptions, Overflow, TextAlign, ELLIPSIS};
pub use planner::{GlyphPlacement, TextLayout, TextPathLayout, LETTER_PADDING_RATIO};
