// SPDX-License-Identifier: MPL-2.0
//! Display-independent text height measurement.
//!
//! The card's height is derived from the wrapped height of its message, so
//! this module provides a pure wrapping model that can be unit-tested
//! without a renderer: a uniform per-character advance with greedy
//! word wrapping. The model intentionally trades per-glyph accuracy for
//! determinism; the card only needs a stable, monotonic estimate.

use crate::config::{INNER_PADDING, OUTER_MARGIN, VERTICAL_PADDING};

/// Width of one character as a fraction of the font size.
const ADVANCE_FACTOR: f32 = 0.55;

/// Line height as a fraction of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.3;

/// Font descriptor used for measurement and rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// Font size in points.
    pub size: f32,
}

impl FontSpec {
    #[must_use]
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    /// Estimated advance width of one character, in points.
    #[must_use]
    pub fn advance(&self) -> f32 {
        self.size * ADVANCE_FACTOR
    }

    /// Height of one wrapped line, in points.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT_FACTOR
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size: crate::config::DEFAULT_FONT_SIZE,
        }
    }
}

/// Returns the height of `text` wrapped at `width`, in points.
///
/// Explicit newlines always break; words are wrapped greedily and words
/// longer than a full line are broken at the line boundary. Empty text
/// measures 0.0. The result is non-decreasing in the length of `text`
/// for a fixed width and font.
#[must_use]
pub fn wrapped_text_height(text: &str, width: f32, font: &FontSpec) -> f32 {
    if text.is_empty() {
        return 0.0;
    }

    let per_line = chars_per_line(width, font);
    let lines: usize = text
        .split('\n')
        .map(|segment| wrapped_line_count(segment, per_line))
        .sum();

    lines as f32 * font.line_height()
}

/// Returns the full card height for `message` on a surface of
/// `surface_width`: the wrapped text height measured inside the outer
/// margins and inner padding, plus the vertical padding above and below.
#[must_use]
pub fn card_height(message: &str, surface_width: f32, font: &FontSpec) -> f32 {
    let text_width = (surface_width - 2.0 * OUTER_MARGIN - 2.0 * INNER_PADDING).max(0.0);
    wrapped_text_height(message, text_width, font) + 2.0 * VERTICAL_PADDING
}

/// Number of characters that fit on one line. At least one, so that
/// degenerate widths still produce a finite measurement.
fn chars_per_line(width: f32, font: &FontSpec) -> usize {
    let advance = font.advance();
    if advance <= 0.0 {
        return 1;
    }
    ((width / advance).floor() as usize).max(1)
}

/// Greedy word wrap of a single newline-free segment.
///
/// An empty segment still occupies one (blank) line, matching how a
/// trailing or doubled newline renders.
fn wrapped_line_count(segment: &str, per_line: usize) -> usize {
    if segment.is_empty() {
        return 1;
    }

    let mut lines = 1usize;
    let mut used = 0usize; // characters on the current line

    for word in segment.split_whitespace() {
        let len = word.chars().count();

        if used > 0 {
            if used + 1 + len <= per_line {
                used += 1 + len;
                continue;
            }
            lines += 1;
        }

        // The word starts at the beginning of the current line; break it
        // at the line boundary if it is longer than a full line.
        let mut remaining = len;
        while remaining > per_line {
            remaining -= per_line;
            lines += 1;
        }
        used = remaining;
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: f32 = 10_000.0;

    #[test]
    fn empty_text_measures_zero() {
        let font = FontSpec::default();
        assert_eq!(wrapped_text_height("", WIDE, &font), 0.0);
    }

    #[test]
    fn single_line_measures_one_line_height() {
        let font = FontSpec::default();
        let height = wrapped_text_height("hello", WIDE, &font);
        assert_eq!(height, font.line_height());
    }

    #[test]
    fn explicit_newline_adds_a_line() {
        let font = FontSpec::default();
        let one = wrapped_text_height("hello", WIDE, &font);
        let two = wrapped_text_height("hello\nworld", WIDE, &font);
        assert_eq!(two, 2.0 * one);
    }

    #[test]
    fn trailing_newline_counts_as_blank_line() {
        let font = FontSpec::default();
        let one = wrapped_text_height("hello", WIDE, &font);
        let two = wrapped_text_height("hello\n", WIDE, &font);
        assert_eq!(two, 2.0 * one);
    }

    #[test]
    fn text_wraps_when_wider_than_line() {
        let font = FontSpec::default();
        // Room for exactly 10 characters per line.
        let width = font.advance() * 10.0;
        let height = wrapped_text_height("aaaa bbbb cccc", width, &font);
        // "aaaa bbbb" fits, "cccc" wraps.
        assert_eq!(height, 2.0 * font.line_height());
    }

    #[test]
    fn long_word_is_broken_at_line_boundary() {
        let font = FontSpec::default();
        let width = font.advance() * 10.0;
        let height = wrapped_text_height(&"x".repeat(25), width, &font);
        // 25 characters at 10 per line -> 3 lines.
        assert_eq!(height, 3.0 * font.line_height());
    }

    #[test]
    fn long_word_after_partial_line_wraps_then_breaks() {
        let font = FontSpec::default();
        let width = font.advance() * 10.0;
        let text = format!("aaaa {}", "x".repeat(25));
        // "aaaa" on line 1; the long word starts fresh on line 2 and
        // breaks across two more.
        assert_eq!(
            wrapped_text_height(&text, width, &font),
            4.0 * font.line_height()
        );
    }

    #[test]
    fn degenerate_width_still_measures() {
        let font = FontSpec::default();
        let height = wrapped_text_height("abc", 0.0, &font);
        // One character per line minimum.
        assert_eq!(height, 3.0 * font.line_height());
    }

    #[test]
    fn height_is_monotonic_in_message_length() {
        let font = FontSpec::default();
        let message = "You are now connected with internet and more words follow";
        let width = 240.0;

        let mut previous = 0.0;
        let mut text = String::new();
        for ch in message.chars() {
            text.push(ch);
            let height = wrapped_text_height(&text, width, &font);
            assert!(
                height >= previous,
                "height decreased at {:?}: {} < {}",
                text,
                height,
                previous
            );
            previous = height;
        }
    }

    #[test]
    fn card_height_of_empty_message_is_padding_only() {
        let font = FontSpec::default();
        assert_eq!(card_height("", 300.0, &font), 2.0 * VERTICAL_PADDING);
    }

    #[test]
    fn card_height_adds_vertical_padding() {
        let font = FontSpec::default();
        let surface_width = 300.0;
        let text_width = surface_width - 2.0 * OUTER_MARGIN - 2.0 * INNER_PADDING;
        let expected = wrapped_text_height("Hi", text_width, &font) + 2.0 * VERTICAL_PADDING;
        assert_eq!(card_height("Hi", surface_width, &font), expected);
    }

    #[test]
    fn font_spec_default_is_15pt() {
        assert_eq!(FontSpec::default().size, 15.0);
    }
}
