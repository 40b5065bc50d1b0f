use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// A font size, either in screen pixels or in map meters.
///
/// Meter sizes keep labels glued to the ground: they shrink and grow with
/// the map zoom and are resolved against the current map scale at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSize {
    /// Fixed screen size, e.g. `"48px"` or `"48"`.
    Pixels(f64),
    /// Ground size, e.g. `"12m"`.
    Meters(f64),
}

impl FontSize {
    /// Resolves the size to pixels.
    ///
    /// `map_scale` is the number of meters per pixel. Returns `None` when a
    /// meter size meets a scale that is not a positive finite number.
    #[must_use]
    pub fn to_pixels(self, map_scale: f64) -> Option<f64> {
        match self {
            Self::Pixels(px) => Some(px),
            Self::Meters(m) if map_scale.is_finite() && map_scale > 0.0 => Some(m / map_scale),
            Self::Meters(_) => None,
        }
    }
}

impl FromStr for FontSize {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (number, meters) = if let Some(n) = trimmed.strip_suffix("px") {
            (n, false)
        } else if let Some(n) = trimmed.strip_suffix('m') {
            (n, true)
        } else {
            (trimmed, false)
        };

        match number.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 && meters => Ok(Self::Meters(v)),
            Ok(v) if v.is_finite() && v > 0.0 => Ok(Self::Pixels(v)),
            _ => Err(StyleError::InvalidFontSize(s.to_owned())),
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{px}px"),
            Self::Meters(m) => write!(f, "{m}m"),
        }
    }
}

/// A concrete font: pixel size plus family, formatted as a CSS font
/// shorthand (`"48px Arial"`).
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub size_px: f64,
    pub family: String,
}

impl FontSpec {
    #[must_use]
    pub fn new(size_px: f64, family: impl Into<String>) -> Self {
        Self {
            size_px,
            family: family.into(),
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(48.0, "Arial")
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size_px, self.family)
    }
}
