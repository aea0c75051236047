//! Built-in monospace face used for all export text.
//!
//! Glyphs come from the 8x8 bitmap face in `font8x8`, scaled to the requested
//! pixel size. The advance is fixed at 3/5 of the font size (the classic
//! monospace advance ratio), which keeps `measure` exact and independent of
//! any font asset on the host.

use font8x8::{BASIC_FONTS, UnicodeFonts};

/// Horizontal advance per glyph at the given font size, in pixels.
pub fn advance(px: f32) -> f32 {
    (px * 3.0 / 5.0).round()
}

/// Rendered width of `text` at the given font size.
pub fn measure(text: &str, px: f32) -> f32 {
    text.chars().count() as f32 * advance(px)
}

/// Distance from the glyph top to the baseline. The bitmap face keeps its
/// baseline on row 7 of the 8-row grid.
pub fn ascent(px: f32) -> f32 {
    advance(px) * 7.0 / 8.0
}

/// The 8 bitmap rows of a glyph, LSB = leftmost pixel. Characters outside the
/// basic plane fall back to a blank cell.
pub fn glyph_rows(ch: char) -> [u8; 8] {
    BASIC_FONTS.get(ch).unwrap_or([0u8; 8])
}
