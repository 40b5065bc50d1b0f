use crate::text::TextMeasure;

use super::Overflow;

/// Result of fitting text to a path length.
#[derive(Debug, Clone, PartialEq)]
pub struct Elision {
    /// The text to draw, including any overflow marker.
    pub text: String,
    /// Number of spaces in `text` before the marker was appended.
    pub spaces: usize,
    /// Whether characters were dropped.
    pub truncated: bool,
}

/// Drops trailing characters of `text` until it fits in `path_length`.
///
/// The fit test counts `padding` once per gap between characters and once
/// more per space. While shortening, the width is measured with the
/// overflow marker already appended. Text may shrink to nothing, in which
/// case only the marker remains. [`Overflow::Visible`] returns the text
/// unchanged.
#[allow(clippy::cast_precision_loss)]
pub fn elide<M>(
    text: &str,
    path_length: f64,
    padding: f64,
    overflow: &Overflow,
    measure: &M,
) -> Elision
where
    M: TextMeasure + ?Sized,
{
    let mut chars: Vec<char> = text.chars().collect();
    let mut spaces = chars.iter().filter(|&&c| c == ' ').count();

    let untouched = |spaces| Elision {
        text: text.to_owned(),
        spaces,
        truncated: false,
    };

    let Some(marker) = overflow.marker() else {
        return untouched(spaces);
    };

    let gaps = chars.len() as f64 - 1.0 + spaces as f64;
    if path_length >= measure.text_width(text) + gaps * padding {
        return untouched(spaces);
    }

    let marker_len = marker.chars().count();
    loop {
        if chars.pop() == Some(' ') {
            spaces -= 1;
        }
        if chars.is_empty() {
            break;
        }

        let candidate: String = chars.iter().copied().chain(marker.chars()).collect();
        let gaps = (chars.len() + marker_len - 1 + spaces) as f64;
        if path_length >= measure.text_width(&candidate) + gaps * padding {
            break;
        }
    }

    let mut fitted: String = chars.into_iter().collect();
    fitted.push_str(marker);
    tracing::debug!(original = text, fitted = %fitted, path_length, "elided overflowing text");

    Elision {
        text: fitted,
        spaces,
        truncated: true,
    }
}
