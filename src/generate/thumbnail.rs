//! Thumbnail generator (YouTube and other platforms).

use std::path::{Path, PathBuf};

use crate::config::FontRole;
use crate::error::Result;
use crate::render::{Canvas, TextBlock, DEFAULT_FONT_SIZE};
use crate::types::AssetKind;

use super::Context;

/// Draw a thumbnail: a row gradient of the primary colour with the title
/// centered on top.
pub fn render_thumbnail(ctx: &Context<'_>, title: &str, size: (u32, u32)) -> Result<Canvas> {
    let colors = &ctx.brand.colors;

    let mut canvas = ctx.canvas(size)?;
    canvas.row_gradient(colors.primary);

    TextBlock::centered(
        title,
        ctx.font(FontRole::Heading, DEFAULT_FONT_SIZE),
        colors.text_primary,
    )
    .draw(&mut canvas);

    ctx.apply_logo(canvas)
}

/// Generate and save a thumbnail, returning its path.
pub fn thumbnail(
    ctx: &Context<'_>,
    title: &str,
    platform: &str,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let size = ctx.dimensions(platform, AssetKind::Thumbnail);
    let canvas = render_thumbnail(ctx, title, size)?;

    let path = ctx.output_path(output, &format!("thumbnail_{}", platform));
    ctx.save(&canvas, &path)
}
