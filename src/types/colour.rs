//! Colour type, hex parsing, and channel arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SigmaError};

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Accepts exactly six hex digits, with or without a leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SigmaError::InvalidColorFormat(s.to_string()));
        }

        let r = parse_hex_byte(&hex[0..2], s)?;
        let g = parse_hex_byte(&hex[2..4], s)?;
        let b = parse_hex_byte(&hex[4..6], s)?;
        Ok(Self::rgb(r, g, b))
    }

    /// Format as `#rrggbb` (lowercase).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to an `(r, g, b)` tuple.
    pub fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Convert to an RGB array.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to an opaque RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Multiply every channel by `factor`, truncating and clamping to 0..=255.
    pub fn scaled(self, factor: f64) -> Self {
        let scale = |c: u8| (c as f64 * factor).trunc().clamp(0.0, 255.0) as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl FromStr for Colour {
    type Err = SigmaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Colour> for image::Rgb<u8> {
    fn from(c: Colour) -> Self {
        image::Rgb(c.to_rgb())
    }
}

/// Convert a hex string like `#1a73e8` to an `(r, g, b)` tuple.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    Colour::from_hex(hex).map(Colour::to_tuple)
}

/// Convert RGB channels to a `#rrggbb` string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Colour::rgb(r, g, b).to_hex()
}

/// Scale the brightness of a hex colour.
///
/// `factor > 1` brightens, `factor < 1` darkens. Results clamp to 0..=255.
pub fn adjust_brightness(hex: &str, factor: f64) -> Result<(u8, u8, u8)> {
    Colour::from_hex(hex).map(|c| c.scaled(factor).to_tuple())
}

/// Linearly interpolate between two hex colours.
///
/// `ratio = 0` yields the first colour, `ratio = 1` the second. Ratios outside
/// 0..=1 extrapolate, so channels may leave the 0..=255 range.
pub fn blend_colors(first: &str, second: &str, ratio: f64) -> Result<(i32, i32, i32)> {
    let a = Colour::from_hex(first)?;
    let b = Colour::from_hex(second)?;

    let mix = |x: u8, y: u8| {
        let x = x as f64;
        (x + (y as f64 - x) * ratio).trunc() as i32
    };

    Ok((mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b)))
}

/// Clamp signed channels (e.g. from [`blend_colors`]) into a colour.
pub fn clamp_channels((r, g, b): (i32, i32, i32)) -> Colour {
    let clamp = |c: i32| c.clamp(0, 255) as u8;
    Colour::rgb(clamp(r), clamp(g), clamp(b))
}

/// Parse a two-character hex byte.
fn parse_hex_byte(pair: &str, original: &str) -> Result<u8> {
    u8::from_str_radix(pair, 16).map_err(|_| SigmaError::InvalidColorFormat(original.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_basic() {
        assert_eq!(hex_to_rgb("#ff0000").unwrap(), (255, 0, 0));
        assert_eq!(hex_to_rgb("#00ff00").unwrap(), (0, 255, 0));
        assert_eq!(hex_to_rgb("#0000ff").unwrap(), (0, 0, 255));
    }

    #[test]
    fn test_hex_to_rgb_no_hash() {
        assert_eq!(hex_to_rgb("1a73e8").unwrap(), (26, 115, 232));
    }

    #[test]
    fn test_hex_to_rgb_uppercase() {
        assert_eq!(hex_to_rgb("#1A73E8").unwrap(), (26, 115, 232));
    }

    #[test]
    fn test_hex_to_rgb_invalid() {
        for bad in ["", "#", "#fff", "#12345", "#1234567", "#gg0000", "+f0000", "#ff 000"] {
            assert!(
                matches!(hex_to_rgb(bad), Err(SigmaError::InvalidColorFormat(_))),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
        assert_eq!(rgb_to_hex(0, 255, 0), "#00ff00");
        assert_eq!(rgb_to_hex(1, 2, 3), "#010203");
    }

    #[test]
    fn test_roundtrip_normalizes_case() {
        for hex in ["#1a73e8", "#FFFFFF", "000000", "#0a0B0c"] {
            let (r, g, b) = hex_to_rgb(hex).unwrap();
            let expected = format!("#{}", hex.trim_start_matches('#').to_lowercase());
            assert_eq!(rgb_to_hex(r, g, b), expected);
        }
    }

    #[test]
    fn test_adjust_brightness_identity() {
        for hex in ["#1a73e8", "#000000", "#ffffff", "#7f7f80"] {
            assert_eq!(adjust_brightness(hex, 1.0).unwrap(), hex_to_rgb(hex).unwrap());
        }
    }

    #[test]
    fn test_adjust_brightness_darken() {
        assert_eq!(adjust_brightness("#ffffff", 0.5).unwrap(), (127, 127, 127));
    }

    #[test]
    fn test_adjust_brightness_clamps_high() {
        assert_eq!(adjust_brightness("#cccccc", 2.0).unwrap(), (255, 255, 255));
    }

    #[test]
    fn test_adjust_brightness_negative_clamps_to_zero() {
        assert_eq!(adjust_brightness("#808080", -3.0).unwrap(), (0, 0, 0));
    }

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend_colors("#ff0000", "#0000ff", 0.0).unwrap(), (255, 0, 0));
        assert_eq!(blend_colors("#ff0000", "#0000ff", 1.0).unwrap(), (0, 0, 255));
    }

    #[test]
    fn test_blend_midpoint_truncates() {
        assert_eq!(blend_colors("#000000", "#ffffff", 0.5).unwrap(), (127, 127, 127));
    }

    #[test]
    fn test_blend_extrapolates() {
        assert_eq!(blend_colors("#000000", "#646464", 2.0).unwrap(), (200, 200, 200));
        assert_eq!(blend_colors("#646464", "#c8c8c8", -1.0).unwrap(), (0, 0, 0));
        assert_eq!(blend_colors("#000000", "#ffffff", 1.5).unwrap(), (382, 382, 382));
    }

    #[test]
    fn test_clamp_channels() {
        assert_eq!(clamp_channels((382, -4, 12)), Colour::rgb(255, 0, 12));
    }

    #[test]
    fn test_scaled_row_fraction() {
        let c = Colour::rgb(200, 100, 51);
        assert_eq!(c.scaled(0.0), Colour::BLACK);
        assert_eq!(c.scaled(0.5), Colour::rgb(100, 50, 25));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#ff0000");
        assert_eq!("#1A73E8".parse::<Colour>().unwrap(), Colour::rgb(26, 115, 232));
    }
}
