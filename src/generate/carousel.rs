//! Multi-slide carousel generator.

use std::path::{Path, PathBuf};

use crate::config::FontRole;
use crate::error::{Result, SigmaError};
use crate::render::{Canvas, TextBlock, DEFAULT_FONT_SIZE};
use crate::types::AssetKind;

use super::Context;

/// Slides generated when the caller does not say otherwise.
pub const DEFAULT_SLIDES: i64 = 5;

const BAR_HEIGHT: i64 = 8;
const CAROUSEL_DIR: &str = "carousel";

/// Draw slide `index` (zero-based) of `count`.
pub fn render_slide(
    ctx: &Context<'_>,
    title: &str,
    index: usize,
    count: usize,
    size: (u32, u32),
) -> Result<Canvas> {
    let colors = &ctx.brand.colors;
    let (width, height) = size;

    let mut canvas = ctx.canvas(size)?;

    let bar = if index % 2 == 0 {
        colors.primary
    } else {
        colors.accent
    };
    canvas.fill_rect((0, 0), (width as i64, BAR_HEIGHT), bar);

    let label = format!("{}/{}", index + 1, count);
    TextBlock::centered(
        &label,
        ctx.font(FontRole::Accent, DEFAULT_FONT_SIZE),
        colors.text_secondary,
    )
    .offset(-(height as i64).div_euclid(3))
    .draw(&mut canvas);

    let slide_title = if index == 0 {
        title.to_string()
    } else {
        format!("{} - Part {}", title, index + 1)
    };
    TextBlock::centered(
        &slide_title,
        ctx.font(FontRole::Heading, DEFAULT_FONT_SIZE),
        colors.text_primary,
    )
    .draw(&mut canvas);

    ctx.apply_logo(canvas)
}

/// Generate `num_slides` slides into `output_dir` (default
/// `<output>/carousel`), returning their paths in slide order.
///
/// Slides already written when a later one fails stay on disk and are
/// reported through [`SigmaError::CarouselIncomplete`].
pub fn carousel(
    ctx: &Context<'_>,
    title: &str,
    num_slides: i64,
    platform: &str,
    output_dir: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    if num_slides < 1 {
        return Err(SigmaError::InvalidSlideCount(num_slides));
    }
    let count = num_slides as usize;

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => ctx.settings.output_dir.join(CAROUSEL_DIR),
    };
    let size = ctx.dimensions(platform, AssetKind::Carousel);
    let extension = ctx.settings.output_format.extension();

    let mut written = Vec::new();
    for index in 0..count {
        let path = dir.join(format!("slide_{:02}.{}", index + 1, extension));
        let slide = render_slide(ctx, title, index, count, size)
            .and_then(|canvas| ctx.save(&canvas, &path));

        match slide {
            Ok(path) => written.push(path),
            Err(source) if written.is_empty() => return Err(source),
            Err(source) => {
                return Err(SigmaError::CarouselIncomplete {
                    written,
                    source: Box::new(source),
                })
            }
        }
    }

    Ok(written)
}
