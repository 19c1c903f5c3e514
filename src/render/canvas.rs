//! Canvas - a solid-colour RGB pixel buffer mutated by draw operations.

use image::{DynamicImage, Rgb, RgbImage, RgbaImage};

use crate::error::{Result, SigmaError};
use crate::types::Colour;

/// A fixed-size RGB drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    ///
    /// Width and height must both be positive.
    pub fn new(width: u32, height: u32, background: Colour) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SigmaError::InvalidDimensions { width, height });
        }

        Ok(Self {
            img: RgbImage::from_pixel(width, height, background.into()),
        })
    }

    /// Wrap an existing image.
    pub fn from_image(img: RgbImage) -> Self {
        Self { img }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    /// Get the colour at a pixel, if in bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.img
            .get_pixel_checked(x, y)
            .map(|p| Colour::rgb(p.0[0], p.0[1], p.0[2]))
    }

    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.img
    }

    pub fn into_image(self) -> RgbImage {
        self.img
    }

    /// Convert to an opaque RGBA image.
    pub fn to_rgba(&self) -> RgbaImage {
        DynamicImage::ImageRgb8(self.img.clone()).to_rgba8()
    }

    /// Fill a rectangle, corners inclusive. Parts outside the canvas are clipped.
    pub fn fill_rect(&mut self, top_left: (i64, i64), bottom_right: (i64, i64), colour: Colour) {
        let (x0, x1) = ordered(top_left.0, bottom_right.0);
        let (y0, y1) = ordered(top_left.1, bottom_right.1);

        let max_x = self.width() as i64 - 1;
        let max_y = self.height() as i64 - 1;
        let (x0, x1) = (x0.max(0), x1.min(max_x));
        let (y0, y1) = (y0.max(0), y1.min(max_y));
        if x0 > x1 || y0 > y1 {
            return;
        }

        let pixel = Rgb::from(colour);
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.img.put_pixel(x as u32, y as u32, pixel);
            }
        }
    }

    /// Draw a rectangle outline `stroke` pixels thick, inset from the bounds.
    pub fn outline_rect(
        &mut self,
        top_left: (i64, i64),
        bottom_right: (i64, i64),
        colour: Colour,
        stroke: u32,
    ) {
        if stroke == 0 {
            return;
        }
        let (x0, x1) = ordered(top_left.0, bottom_right.0);
        let (y0, y1) = ordered(top_left.1, bottom_right.1);
        let s = stroke as i64 - 1;

        // Strokes wider than half the box fill it.
        if x0 + s >= x1 - s || y0 + s >= y1 - s {
            self.fill_rect((x0, y0), (x1, y1), colour);
            return;
        }

        self.fill_rect((x0, y0), (x1, y0 + s), colour);
        self.fill_rect((x0, y1 - s), (x1, y1), colour);
        self.fill_rect((x0, y0), (x0 + s, y1), colour);
        self.fill_rect((x1 - s, y0), (x1, y1), colour);
    }

    /// Shade each row `y` with `base * (y / height)`, truncated.
    ///
    /// Row 0 is black and the last row approaches `base`.
    pub fn row_gradient(&mut self, base: Colour) {
        let (width, height) = self.size();
        for y in 0..height {
            let alpha = y as f64 / height as f64;
            let row = base.scaled(alpha);
            self.fill_rect((0, y as i64), (width as i64 - 1, y as i64), row);
        }
    }
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Colour = Colour::rgb(10, 20, 30);
    const RED: Colour = Colour::rgb(255, 0, 0);

    #[test]
    fn test_new_fills_background() {
        let canvas = Canvas::new(4, 3, BG).unwrap();
        assert_eq!(canvas.size(), (4, 3));
        assert!(canvas.image().pixels().all(|p| p.0 == [10, 20, 30]));
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(
            Canvas::new(0, 10, BG),
            Err(SigmaError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(Canvas::new(10, 0, BG).is_err());
    }

    #[test]
    fn test_fill_rect_inclusive() {
        let mut canvas = Canvas::new(5, 5, BG).unwrap();
        canvas.fill_rect((1, 1), (2, 3), RED);

        assert_eq!(canvas.get(1, 1), Some(RED));
        assert_eq!(canvas.get(2, 3), Some(RED));
        assert_eq!(canvas.get(3, 3), Some(BG));
        assert_eq!(canvas.get(1, 4), Some(BG));
        assert_eq!(canvas.get(0, 0), Some(BG));
    }

    #[test]
    fn test_fill_rect_clips_and_swaps() {
        let mut canvas = Canvas::new(4, 4, BG).unwrap();
        canvas.fill_rect((10, 1), (-3, 0), RED);

        for x in 0..4 {
            assert_eq!(canvas.get(x, 0), Some(RED));
            assert_eq!(canvas.get(x, 1), Some(RED));
            assert_eq!(canvas.get(x, 2), Some(BG));
        }
    }

    #[test]
    fn test_fill_rect_fully_outside() {
        let mut canvas = Canvas::new(4, 4, BG).unwrap();
        canvas.fill_rect((5, 5), (9, 9), RED);
        assert!(canvas.image().pixels().all(|p| p.0 == [10, 20, 30]));
    }

    #[test]
    fn test_outline_rect() {
        let mut canvas = Canvas::new(10, 10, BG).unwrap();
        canvas.outline_rect((1, 1), (8, 8), RED, 2);

        // Stroke band
        assert_eq!(canvas.get(1, 1), Some(RED));
        assert_eq!(canvas.get(2, 5), Some(RED));
        assert_eq!(canvas.get(8, 8), Some(RED));
        assert_eq!(canvas.get(7, 4), Some(RED));
        // Interior and exterior untouched
        assert_eq!(canvas.get(3, 3), Some(BG));
        assert_eq!(canvas.get(6, 6), Some(BG));
        assert_eq!(canvas.get(0, 0), Some(BG));
        assert_eq!(canvas.get(9, 9), Some(BG));
    }

    #[test]
    fn test_outline_rect_thick_stroke_fills() {
        let mut canvas = Canvas::new(6, 6, BG).unwrap();
        canvas.outline_rect((0, 0), (3, 3), RED, 3);
        assert_eq!(canvas.get(1, 1), Some(RED));
        assert_eq!(canvas.get(4, 4), Some(BG));
    }

    #[test]
    fn test_row_gradient() {
        let mut canvas = Canvas::new(3, 4, BG).unwrap();
        canvas.row_gradient(Colour::rgb(200, 100, 40));

        assert_eq!(canvas.get(0, 0), Some(Colour::BLACK));
        assert_eq!(canvas.get(2, 1), Some(Colour::rgb(50, 25, 10)));
        assert_eq!(canvas.get(1, 2), Some(Colour::rgb(100, 50, 20)));
        assert_eq!(canvas.get(0, 3), Some(Colour::rgb(150, 75, 30)));
    }

    #[test]
    fn test_to_rgba_is_opaque() {
        let canvas = Canvas::new(2, 2, BG).unwrap();
        let rgba = canvas.to_rgba();
        assert!(rgba.pixels().all(|p| p.0 == [10, 20, 30, 255]));
    }
}
