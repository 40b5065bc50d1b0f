use thiserror::Error;

/// Top-level error type for the text path engine.
#[derive(Debug, Error)]
pub enum TextPathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Errors related to path construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("path needs at least 2 distinct points, got {count}")]
    TooFewPoints { count: usize },

    #[error("flat coordinate list has odd length {0}")]
    OddCoordinateCount(usize),

    #[error("non-finite coordinate at point {index}")]
    NonFinite { index: usize },
}

/// Errors related to parsing style and layout options.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("invalid font size: {0:?}")]
    InvalidFontSize(String),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("unknown text alignment: {0:?}")]
    UnknownAlign(String),

    #[error("unknown text baseline: {0:?}")]
    UnknownBaseline(String),

    #[error("opacity {0} is out of range [0, 1]")]
    InvalidOpacity(f64),

    #[error("line width {0} must be non-negative")]
    InvalidLineWidth(f64),
}

/// Convenience type alias for results using [`TextPathError`].
pub type Result<T> = std::result::Result<T, TextPathError>;
