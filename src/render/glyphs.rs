//! Built-in 5x7 digit glyphs for the score readout
//!
//! Used whenever the bundled font file is absent. Each glyph row is five
//! bits, most significant bit leftmost, scaled up at draw time.

use glam::Vec2;

/// Unscaled glyph cell
pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;
/// Integer upscale factor applied when rasterizing
pub const GLYPH_SCALE: usize = 5;
/// Unscaled horizontal gap between glyphs
const GLYPH_GAP: usize = 1;

const DIGITS: [[u8; GLYPH_HEIGHT]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

/// Bitmap rows for one digit character
pub fn digit(c: char) -> Option<&'static [u8; GLYPH_HEIGHT]> {
    c.to_digit(10).map(|d| &DIGITS[d as usize])
}

/// Scaled advance from one glyph origin to the next
pub fn advance() -> usize {
    (GLYPH_WIDTH + GLYPH_GAP) * GLYPH_SCALE
}

/// Rendered size of a digit string in pixels
pub fn text_size(text: &str) -> Vec2 {
    let count = text.chars().count();
    if count == 0 {
        return Vec2::ZERO;
    }
    let width = count * advance() - GLYPH_GAP * GLYPH_SCALE;
    Vec2::new(width as f32, (GLYPH_HEIGHT * GLYPH_SCALE) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_digit_has_a_glyph() {
        for c in "0123456789".chars() {
            assert!(digit(c).is_some());
        }
        assert!(digit('x').is_none());
    }

    #[test]
    fn test_text_size_grows_with_length() {
        assert_eq!(text_size(""), Vec2::ZERO);
        let one = text_size("7");
        let three = text_size("123");
        assert_eq!(one.y, three.y);
        assert!(three.x > 2.0 * one.x);
    }
}
