//! Image loading, resizing, and alpha overlay.

use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{Result, SigmaError};

/// How an image is fitted into a target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Fit {
    /// Fill the box exactly, cropping the overflow from the center.
    #[default]
    Cover,
    /// Fit inside the box, keeping the whole image.
    Contain,
}

impl FromStr for Fit {
    type Err = SigmaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cover" => Ok(Fit::Cover),
            "contain" => Ok(Fit::Contain),
            _ => Err(SigmaError::Parse {
                message: format!("Unknown resize method: '{}'", s),
                help: Some("Use 'cover' or 'contain'".to_string()),
            }),
        }
    }
}

/// Load an image from disk as RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| SigmaError::Image {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(img.to_rgba8())
}

/// Resize `img` into a `width` x `height` box using Lanczos resampling.
///
/// `Cover` always returns exactly `width` x `height`. `Contain` keeps the
/// aspect ratio and may return a smaller image.
pub fn resize_image(img: &RgbaImage, width: u32, height: u32, fit: Fit) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(SigmaError::InvalidDimensions { width, height });
    }
    let (src_w, src_h) = img.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(SigmaError::InvalidDimensions {
            width: src_w,
            height: src_h,
        });
    }

    // Compare width/src_w against height/src_h without floating point.
    let width_bound = width as u64 * src_h as u64 <= height as u64 * src_w as u64;

    match fit {
        Fit::Cover => {
            let (scaled_w, scaled_h) = if width_bound {
                (scale_side(src_w, src_h, height).max(width), height)
            } else {
                (width, scale_side(src_h, src_w, width).max(height))
            };
            let resized = imageops::resize(img, scaled_w, scaled_h, FilterType::Lanczos3);

            let left = (scaled_w - width) / 2;
            let top = (scaled_h - height) / 2;
            Ok(imageops::crop_imm(&resized, left, top, width, height).to_image())
        }
        Fit::Contain => {
            let (scaled_w, scaled_h) = if width_bound {
                (width, scale_side_down(src_h, src_w, width))
            } else {
                (scale_side_down(src_w, src_h, height), height)
            };
            Ok(imageops::resize(img, scaled_w, scaled_h, FilterType::Lanczos3))
        }
    }
}

/// Scale `side` by `target / reference`, rounded to the nearest pixel (min 1).
fn scale_side(side: u32, reference: u32, target: u32) -> u32 {
    let reference = reference as u64;
    let scaled = (side as u64 * target as u64 + reference / 2) / reference;
    scaled.max(1) as u32
}

/// Scale `side` by `target / reference`, truncated so the result never
/// overflows the box (min 1).
fn scale_side_down(side: u32, reference: u32, target: u32) -> u32 {
    let scaled = side as u64 * target as u64 / reference as u64;
    scaled.max(1) as u32
}

/// Paste `overlay` onto a copy of `base` at `position`, masked by the
/// overlay's alpha.
///
/// With `opacity < 1` each overlay alpha value is first scaled by `opacity`
/// (truncated). Pixels falling outside `base` are dropped.
pub fn overlay_image(
    base: &RgbaImage,
    overlay: &RgbaImage,
    position: (i64, i64),
    opacity: f64,
) -> RgbaImage {
    let mut result = base.clone();
    let (base_w, base_h) = (base.width() as i64, base.height() as i64);

    for (ox, oy, src) in overlay.enumerate_pixels() {
        let bx = position.0 + ox as i64;
        let by = position.1 + oy as i64;
        if bx < 0 || by < 0 || bx >= base_w || by >= base_h {
            continue;
        }

        let mut alpha = src.0[3] as u32;
        if opacity < 1.0 {
            alpha = (alpha as f64 * opacity.max(0.0)) as u32;
        }
        if alpha == 0 {
            continue;
        }

        let dst = result.get_pixel_mut(bx as u32, by as u32);
        for i in 0..4 {
            let blended = (src.0[i] as u32 * alpha + dst.0[i] as u32 * (255 - alpha)) / 255;
            dst.0[i] = blended as u8;
        }
    }

    result
}
