use std::collections::HashMap;

/// Measures the rendered width of a string, in path units.
pub trait TextMeasure {
    /// Returns the advance width of `text` under the current font.
    fn text_width(&self, text: &str) -> f64;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn text_width(&self, text: &str) -> f64 {
        (**self).text_width(text)
    }
}

/// Measures every character with the same advance (monospace).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance(pub f64);

impl TextMeasure for FixedAdvance {
    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.0
    }
}

/// Per-character advance widths with a fallback for unlisted characters.
///
/// The width of a string is the sum of its character advances; no kerning.
#[derive(Debug, Clone, Default)]
pub struct AdvanceTable {
    advances: HashMap<char, f64>,
    fallback: f64,
}

impl AdvanceTable {
    /// Creates an empty table where every character measures `fallback`.
    #[must_use]
    pub fn new(fallback: f64) -> Self {
        Self {
            advances: HashMap::new(),
            fallback,
        }
    }

    /// Sets the advance of a single character.
    #[must_use]
    pub fn with(mut self, ch: char, advance: f64) -> Self {
        self.advances.insert(ch, advance);
        self
    }

    /// Returns the advance of `ch`.
    #[must_use]
    pub fn advance(&self, ch: char) -> f64 {
        self.advances.get(&ch).copied().unwrap_or(self.fallback)
    }
}

impl TextMeasure for AdvanceTable {
    fn text_width(&self, text: &str) -> f64 {
        text.chars().map(|ch| self.advance(ch)).sum()
    }
}
