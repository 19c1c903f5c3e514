//! Built-in 5x7 bitmap face.
//!
//! Used when no TrueType font can be resolved, so text always renders.
//! Glyphs cover printable ASCII; anything else draws as `?`.

/// Glyph columns per character (bit 0 is the top row).
const GLYPH_WIDTH: u32 = 5;

/// Glyph rows.
const GLYPH_HEIGHT: u32 = 7;

/// Advance per character, in cells (glyph plus one blank column).
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Column data for 0x20..=0x7E.
#[rustfmt::skip]
const GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], [0x00, 0x00, 0x5F, 0x00, 0x00], [0x00, 0x07, 0x00, 0x07, 0x00],
    [0x14, 0x7F, 0x14, 0x7F, 0x14], [0x24, 0x2A, 0x7F, 0x2A, 0x12], [0x23, 0x13, 0x08, 0x64, 0x62],
    [0x36, 0x49, 0x56, 0x20, 0x50], [0x00, 0x05, 0x03, 0x00, 0x00], [0x00, 0x1C, 0x22, 0x41, 0x00],
    [0x00, 0x41, 0x22, 0x1C, 0x00], [0x08, 0x2A, 0x1C, 0x2A, 0x08], [0x08, 0x08, 0x3E, 0x08, 0x08],
    [0x00, 0x50, 0x30, 0x00, 0x00], [0x08, 0x08, 0x08, 0x08, 0x08], [0x00, 0x60, 0x60, 0x00, 0x00],
    [0x20, 0x10, 0x08, 0x04, 0x02], [0x3E, 0x51, 0x49, 0x45, 0x3E], [0x00, 0x42, 0x7F, 0x40, 0x00],
    [0x42, 0x61, 0x51, 0x49, 0x46], [0x21, 0x41, 0x45, 0x4B, 0x31], [0x18, 0x14, 0x12, 0x7F, 0x10],
    [0x27, 0x45, 0x45, 0x45, 0x39], [0x3C, 0x4A, 0x49, 0x49, 0x30], [0x01, 0x71, 0x09, 0x05, 0x03],
    [0x36, 0x49, 0x49, 0x49, 0x36], [0x06, 0x49, 0x49, 0x29, 0x1E], [0x00, 0x36, 0x36, 0x00, 0x00],
    [0x00, 0x56, 0x36, 0x00, 0x00], [0x08, 0x14, 0x22, 0x41, 0x00], [0x14, 0x14, 0x14, 0x14, 0x14],
    [0x00, 0x41, 0x22, 0x14, 0x08], [0x02, 0x01, 0x51, 0x09, 0x06], [0x32, 0x49, 0x79, 0x41, 0x3E],
    [0x7E, 0x11, 0x11, 0x11, 0x7E], [0x7F, 0x49, 0x49, 0x49, 0x36], [0x3E, 0x41, 0x41, 0x41, 0x22],
    [0x7F, 0x41, 0x41, 0x22, 0x1C], [0x7F, 0x49, 0x49, 0x49, 0x41], [0x7F, 0x09, 0x09, 0x09, 0x01],
    [0x3E, 0x41, 0x49, 0x49, 0x7A], [0x7F, 0x08, 0x08, 0x08, 0x7F], [0x00, 0x41, 0x7F, 0x41, 0x00],
    [0x20, 0x40, 0x41, 0x3F, 0x01], [0x7F, 0x08, 0x14, 0x22, 0x41], [0x7F, 0x40, 0x40, 0x40, 0x40],
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], [0x7F, 0x04, 0x08, 0x10, 0x7F], [0x3E, 0x41, 0x41, 0x41, 0x3E],
    [0x7F, 0x09, 0x09, 0x09, 0x06], [0x3E, 0x41, 0x51, 0x21, 0x5E], [0x7F, 0x09, 0x19, 0x29, 0x46],
    [0x46, 0x49, 0x49, 0x49, 0x31], [0x01, 0x01, 0x7F, 0x01, 0x01], [0x3F, 0x40, 0x40, 0x40, 0x3F],
    [0x1F, 0x20, 0x40, 0x20, 0x1F], [0x3F, 0x40, 0x38, 0x40, 0x3F], [0x63, 0x14, 0x08, 0x14, 0x63],
    [0x07, 0x08, 0x70, 0x08, 0x07], [0x61, 0x51, 0x49, 0x45, 0x43], [0x00, 0x7F, 0x41, 0x41, 0x00],
    [0x02, 0x04, 0x08, 0x10, 0x20], [0x00, 0x41, 0x41, 0x7F, 0x00], [0x04, 0x02, 0x01, 0x02, 0x04],
    [0x40, 0x40, 0x40, 0x40, 0x40], [0x00, 0x01, 0x02, 0x04, 0x00], [0x20, 0x54, 0x54, 0x54, 0x78],
    [0x7F, 0x48, 0x44, 0x44, 0x38], [0x38, 0x44, 0x44, 0x44, 0x20], [0x38, 0x44, 0x44, 0x48, 0x7F],
    [0x38, 0x54, 0x54, 0x54, 0x18], [0x08, 0x7E, 0x09, 0x01, 0x02], [0x0C, 0x52, 0x52, 0x52, 0x3E],
    [0x7F, 0x08, 0x04, 0x04, 0x78], [0x00, 0x44, 0x7D, 0x40, 0x00], [0x20, 0x40, 0x44, 0x3D, 0x00],
    [0x7F, 0x10, 0x28, 0x44, 0x00], [0x00, 0x41, 0x7F, 0x40, 0x00], [0x7C, 0x04, 0x18, 0x04, 0x78],
    [0x7C, 0x08, 0x04, 0x04, 0x78], [0x38, 0x44, 0x44, 0x44, 0x38], [0x7C, 0x14, 0x14, 0x14, 0x08],
    [0x08, 0x14, 0x14, 0x18, 0x7C], [0x7C, 0x08, 0x04, 0x04, 0x08], [0x48, 0x54, 0x54, 0x54, 0x20],
    [0x04, 0x3F, 0x44, 0x40, 0x20], [0x3C, 0x40, 0x40, 0x20, 0x7C], [0x1C, 0x20, 0x40, 0x20, 0x1C],
    [0x3C, 0x40, 0x30, 0x40, 0x3C], [0x44, 0x28, 0x10, 0x28, 0x44], [0x0C, 0x50, 0x50, 0x50, 0x3C],
    [0x44, 0x64, 0x54, 0x4C, 0x44], [0x00, 0x08, 0x36, 0x41, 0x00], [0x00, 0x00, 0x7F, 0x00, 0x00],
    [0x00, 0x41, 0x36, 0x08, 0x00], [0x02, 0x01, 0x02, 0x04, 0x02],
];

fn glyph(c: char) -> &'static [u8; 5] {
    let index = match c {
        ' '..='~' => c as usize - 0x20,
        _ => '?' as usize - 0x20,
    };
    &GLYPHS[index]
}

/// Pixel size of one glyph cell at the given font size.
pub fn cell_size(size: f32) -> u32 {
    ((size / 8.0).floor() as u32).max(1)
}

/// Bounding box of `text` at `size`.
pub fn measure(text: &str, size: f32) -> (u32, u32) {
    let count = text.chars().count() as u32;
    if count == 0 {
        return (0, 0);
    }
    let cell = cell_size(size);
    (count * ADVANCE * cell - cell, GLYPH_HEIGHT * cell)
}

/// Call `plot(x, y)` for every lit pixel of `text` with its top-left at `(x, y)`.
pub fn rasterize(text: &str, size: f32, x: i64, y: i64, mut plot: impl FnMut(i64, i64)) {
    let cell = cell_size(size) as i64;

    for (i, c) in text.chars().enumerate() {
        let origin_x = x + i as i64 * ADVANCE as i64 * cell;
        for (col, bits) in glyph(c).iter().enumerate() {
            for row in 0..GLYPH_HEIGHT as i64 {
                if bits & (1 << row) == 0 {
                    continue;
                }
                let px = origin_x + col as i64 * cell;
                let py = y + row * cell;
                for dy in 0..cell {
                    for dx in 0..cell {
                        plot(px + dx, py + dy);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_single_cell() {
        assert_eq!(measure("hello", 8.0), (29, 7));
        assert_eq!(measure("a", 8.0), (5, 7));
    }

    #[test]
    fn test_measure_scales_with_size() {
        assert_eq!(cell_size(48.0), 6);
        assert_eq!(measure("ab", 48.0), (66, 42));
    }

    #[test]
    fn test_measure_empty() {
        assert_eq!(measure("", 24.0), (0, 0));
    }

    #[test]
    fn test_small_sizes_use_one_cell() {
        assert_eq!(cell_size(1.0), 1);
        assert_eq!(cell_size(0.0), 1);
    }

    #[test]
    fn test_rasterize_stays_in_measured_box() {
        let (w, h) = measure("Wg|", 16.0);
        let mut count = 0;
        rasterize("Wg|", 16.0, 10, 20, |x, y| {
            assert!(x >= 10 && x < 10 + w as i64);
            assert!(y >= 20 && y < 20 + h as i64);
            count += 1;
        });
        assert!(count > 0);
    }

    #[test]
    fn test_non_ascii_draws_placeholder() {
        let mut plain = Vec::new();
        rasterize("?", 8.0, 0, 0, |x, y| plain.push((x, y)));
        let mut other = Vec::new();
        rasterize("é", 8.0, 0, 0, |x, y| other.push((x, y)));
        assert_eq!(plain, other);
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut count = 0;
        rasterize("   ", 24.0, 0, 0, |_, _| count += 1);
        assert_eq!(count, 0);
    }
}
