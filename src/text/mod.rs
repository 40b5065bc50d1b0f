mod font;
mod measure;

pub use font::{FontSize, FontSpec};
pub use measure::{AdvanceTable, FixedAdvance, TextMeasure};
