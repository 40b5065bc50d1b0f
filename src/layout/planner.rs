use crate::geometry::Path;
use crate::math::Point2;
use crate::text::TextMeasure;

use super::{elide, LayoutOptions, TextAlign};

/// Base letter spacing as a fraction of the width of a space.
pub const LETTER_PADDING_RATIO: f64 = 0.25;

/// Where and how a single character is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    pub character: char,
    /// Horizontal center of the glyph on the path.
    pub position: Point2,
    /// Tangent angle of the path at `position`, in radians.
    pub rotation: f64,
}

/// Text fitted onto a path, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    /// The text actually laid out, after elision.
    pub text: String,
    pub path_length: f64,
    /// Arc length at which the first glyph starts.
    pub start_offset: f64,
    /// Spacing added after each glyph (twice after a space).
    pub padding: f64,
    /// Whether the text was shortened to fit.
    pub truncated: bool,
    /// Glyphs in path order.
    pub glyphs: Vec<GlyphPlacement>,
}

/// Lays out a string along a [`Path`].
///
/// The planner measures the path, elides text that does not fit (per
/// [`LayoutOptions::overflow`]), picks a start offset from the justification
/// mode, and then places each glyph at the path sample under its horizontal
/// center, rotated to the local tangent.
#[derive(Debug)]
pub struct TextPathLayout<'a> {
    text: &'a str,
    options: &'a LayoutOptions,
}

impl<'a> TextPathLayout<'a> {
    /// Creates a new layout operation.
    #[must_use]
    pub fn new(text: &'a str, options: &'a LayoutOptions) -> Self {
        Self { text, options }
    }

    /// Executes the layout.
    ///
    /// Returns `None` when nothing should be drawn: empty text, or a path
    /// shorter than [`LayoutOptions::min_path_length`].
    #[allow(clippy::cast_precision_loss)]
    pub fn execute<M>(&self, path: &Path, measure: &M) -> Option<TextLayout>
    where
        M: TextMeasure + ?Sized,
    {
        if self.text.is_empty() {
            tracing::debug!("empty text, nothing to lay out");
            return None;
        }

        let reversed;
        let path = if self.options.keep_upright && path.runs_backwards() {
            reversed = path.reversed();
            &reversed
        } else {
            path
        };

        let path_length = path.length();
        if path_length < self.options.min_path_length {
            tracing::debug!(
                path_length,
                min_path_length = self.options.min_path_length,
                "path too short for text"
            );
            return None;
        }

        let mut padding = measure.text_width(" ") * LETTER_PADDING_RATIO;
        let fit = elide(self.text, path_length, padding, &self.options.overflow, measure);
        let count = fit.text.chars().count() as f64;
        let spaces = fit.spaces as f64;
        let text_width = measure.text_width(&fit.text);

        let start_offset = if self.options.justify {
            let gaps = count - 1.0 + spaces;
            padding = if gaps > 0.0 {
                (path_length - text_width) / gaps
            } else {
                0.0
            };
            0.0
        } else {
            match self.options.align {
                TextAlign::Start | TextAlign::Left => 0.0,
                TextAlign::Center | TextAlign::End | TextAlign::Right => {
                    let slack = path_length - text_width - (count + spaces) * padding;
                    if self.options.align == TextAlign::Center {
                        slack / 2.0
                    } else {
                        slack
                    }
                }
            }
        };

        let mut sampler = path.sampler();
        let mut cursor = start_offset;
        let mut glyphs = Vec::with_capacity(fit.text.len());
        let mut buf = [0u8; 4];
        for character in fit.text.chars() {
            let width = measure.text_width(character.encode_utf8(&mut buf));
            let sample = sampler.sample_at(cursor + width / 2.0);
            tracing::trace!(%character, distance = cursor, x = sample.position.x, y = sample.position.y, "placed glyph");
            glyphs.push(GlyphPlacement {
                character,
                position: sample.position,
                rotation: sample.angle,
            });
            cursor += width + if character == ' ' { 2.0 * padding } else { padding };
        }

        Some(TextLayout {
            text: fit.text,
            path_length,
            start_offset,
            padding,
            truncated: fit.truncated,
            glyphs,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::layout::{Overflow, ELLIPSIS};
    use crate::text::{AdvanceTable, FixedAdvance};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOL: f64 = 1e-9;

    fn straight(length: f64) -> Path {
        Path::new(vec![Point2::new(0.0, 0.0), Point2::new(length, 0.0)]).unwrap()
    }

    #[test]
    fn left_aligned_two_letters() {
        let opts = LayoutOptions::default();
        let layout = TextPathLayout::new("AB", &opts)
            .execute(&straight(100.0), &FixedAdvance(20.0))
            .unwrap();

        assert_eq!(layout.glyphs.len(), 2);
        assert_abs_diff_eq!(layout.padding, 5.0, epsilon = TOL);
        assert_abs_diff_eq!(layout.glyphs[0].position.x, 10.0, epsilon = TOL);
        assert_abs_diff_eq!(layout.glyphs[1].position.x, 35.0, epsilon = TOL);
        for g in &layout.glyphs {
            assert_abs_diff_eq!(g.position.y, 0.0, epsilon = TOL);
            assert_abs_diff_eq!(g.rotation, 0.0, epsilon = TOL);
        }
    }

    #[test]
    fn ellipsis_on_short_path() {
        let opts = LayoutOptions {
            overflow: Overflow::Ellipsis,
            ..LayoutOptions::default()
        };
        let layout = TextPathLayout::new("A A", &opts)
            .execute(&straight(50.0), &FixedAdvance(20.0))
            .unwrap();

        assert!(layout.truncated);
        assert!(layout.text.ends_with(ELLIPSIS));
        let last = layout.glyphs.last().unwrap();
        assert_eq!(last.character, '\u{2026}');
        assert!(last.position.x + 10.0 <= layout.path_length + TOL);
    }

    #[test]
    fn center_alignment_offset() {
        let opts = LayoutOptions {
            align: TextAlign::Center,
            ..LayoutOptions::default()
        };
        let layout = TextPathLayout::new("AB", &opts)
            .execute(&straight(100.0), &FixedAdvance(20.0))
            .unwrap();
        // (100 - 40 - 2 * 5) / 2
        assert_abs_diff_eq!(layout.start_offset, 25.0, epsilon = TOL);
        assert_abs_diff_eq!(layout.glyphs[0].position.x, 35.0, epsilon = TOL);
    }

    #[test]
    fn right_and_end_alignment_offset() {
        for align in [TextAlign::Right, TextAlign::End] {
            let opts = LayoutOptions {
                align,
                ..LayoutOptions::default()
            };
            let layout = TextPathLayout::new("AB", &opts)
                .execute(&straight(100.0), &FixedAdvance(20.0))
                .unwrap();
            assert_abs_diff_eq!(layout.start_offset, 50.0, epsilon = TOL);
        }
    }

    #[test]
    fn justify_spans_the_whole_path() {
        let measure = AdvanceTable::new(9.0).with(' ', 4.0).with('i', 3.0);
        let opts = LayoutOptions {
            justify: true,
            align: TextAlign::Right,
            ..LayoutOptions::default()
        };
        let text = "Via Appia";
        let path = Path::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(60.0, 0.0),
            Point2::new(60.0, 80.0),
        ])
        .unwrap();
        let layout = TextPathLayout::new(text, &opts).execute(&path, &measure).unwrap();

        assert_abs_diff_eq!(layout.start_offset, 0.0);
        let widths: f64 = text.chars().map(|c| measure.advance(c)).sum();
        let gaps = (text.chars().count() - 1 + 1) as f64;
        assert_abs_diff_eq!(widths + gaps * layout.padding, 140.0, epsilon = TOL);

        // The last glyph ends exactly at the end of the path.
        let last = layout.glyphs.last().unwrap();
        assert_abs_diff_eq!(last.position.x, 60.0, epsilon = TOL);
        assert_abs_diff_eq!(last.position.y, 80.0 - 4.5, epsilon = TOL);
        assert_abs_diff_eq!(last.rotation, FRAC_PI_2, epsilon = TOL);
    }

    #[test]
    fn justify_single_glyph_has_no_padding() {
        let opts = LayoutOptions {
            justify: true,
            ..LayoutOptions::default()
        };
        let layout = TextPathLayout::new("X", &opts)
            .execute(&straight(100.0), &FixedAdvance(10.0))
            .unwrap();
        assert!(layout.padding.is_finite());
        assert_abs_diff_eq!(layout.glyphs[0].position.x, 5.0, epsilon = TOL);
    }

    #[test]
    fn spaces_get_double_padding() {
        let opts = LayoutOptions::default();
        let layout = TextPathLayout::new("A B", &opts)
            .execute(&straight(200.0), &FixedAdvance(20.0))
            .unwrap();
        let xs: Vec<f64> = layout.glyphs.iter().map(|g| g.position.x).collect();
        assert_abs_diff_eq!(xs[1] - xs[0], 25.0, epsilon = TOL);
        assert_abs_diff_eq!(xs[2] - xs[1], 30.0, epsilon = TOL);
    }

    #[test]
    fn too_short_path_yields_nothing() {
        let opts = LayoutOptions {
            min_path_length: 20.0,
            ..LayoutOptions::default()
        };
        let layout = TextPathLayout::new("AB", &opts).execute(&straight(19.0), &FixedAdvance(2.0));
        assert!(layout.is_none());
    }

    #[test]
    fn empty_text_yields_nothing() {
        let opts = LayoutOptions::default();
        assert!(TextPathLayout::new("", &opts)
            .execute(&straight(100.0), &FixedAdvance(2.0))
            .is_none());
    }

    #[test]
    fn hidden_overflow_can_leave_no_glyphs() {
        let opts = LayoutOptions::default();
        let layout = TextPathLayout::new("WIDE", &opts)
            .execute(&straight(5.0), &FixedAdvance(10.0))
            .unwrap();
        assert!(layout.truncated);
        assert!(layout.glyphs.is_empty());
    }

    #[test]
    fn visible_overflow_stacks_on_the_last_point() {
        let opts = LayoutOptions {
            overflow: Overflow::Visible,
            ..LayoutOptions::default()
        };
        let layout = TextPathLayout::new("ABCDEF", &opts)
            .execute(&straight(30.0), &FixedAdvance(10.0))
            .unwrap();

        let xs: Vec<f64> = layout.glyphs.iter().map(|g| g.position.x).collect();
        assert_eq!(xs.len(), 6);
        for (x, expected) in xs.iter().zip([5.0, 17.5, 30.0, 30.0, 30.0, 30.0]) {
            assert_abs_diff_eq!(*x, expected, epsilon = TOL);
        }
    }

    #[test]
    fn keep_upright_flips_backwards_paths() {
        let path = Path::new(vec![Point2::new(100.0, 0.0), Point2::new(0.0, 0.0)]).unwrap();
        let measure = FixedAdvance(20.0);

        let plain = LayoutOptions::default();
        let layout = TextPathLayout::new("AB", &plain).execute(&path, &measure).unwrap();
        assert_abs_diff_eq!(layout.glyphs[0].position.x, 90.0, epsilon = TOL);
        assert_abs_diff_eq!(layout.glyphs[0].rotation.abs(), PI, epsilon = TOL);

        let upright = LayoutOptions {
            keep_upright: true,
            ..LayoutOptions::default()
        };
        let layout = TextPathLayout::new("AB", &upright).execute(&path, &measure).unwrap();
        assert_abs_diff_eq!(layout.glyphs[0].position.x, 10.0, epsilon = TOL);
        assert_abs_diff_eq!(layout.glyphs[0].rotation, 0.0, epsilon = TOL);
    }

    #[test]
    fn glyphs_follow_the_corner() {
        let path = Path::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(30.0, 0.0),
            Point2::new(30.0, 30.0),
        ])
        .unwrap();
        let opts = LayoutOptions::default();
        let layout = TextPathLayout::new("ABC", &opts)
            .execute(&path, &FixedAdvance(8.0))
            .unwrap();
        // padding = 2; centers at 4, 14, 24 -> all on the first leg.
        assert_abs_diff_eq!(layout.glyphs[2].position.x, 24.0, epsilon = TOL);

        let layout = TextPathLayout::new("ABCD", &opts)
            .execute(&path, &FixedAdvance(12.0))
            .unwrap();
        // padding = 3; centers at 6, 21, 36 -> third glyph on the second leg.
        let third = layout.glyphs[2];
        assert_abs_diff_eq!(third.position.x, 30.0, epsilon = TOL);
        assert_abs_diff_eq!(third.position.y, 6.0, epsilon = TOL);
        assert_abs_diff_eq!(third.rotation, FRAC_PI_2, epsilon = TOL);
    }
}
