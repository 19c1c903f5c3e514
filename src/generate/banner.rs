//! Banner generator: an accent bar over the background with title and tagline.

use std::path::{Path, PathBuf};

use crate::config::FontRole;
use crate::error::Result;
use crate::render::{Canvas, TextBlock, DEFAULT_FONT_SIZE};
use crate::types::AssetKind;

use super::Context;

/// Vertical shift of the tagline below the canvas center.
const TAGLINE_OFFSET: i64 = 60;

pub fn render_banner(
    ctx: &Context<'_>,
    title: &str,
    tagline: &str,
    size: (u32, u32),
) -> Result<Canvas> {
    let colors = &ctx.brand.colors;
    let (width, height) = size;

    let mut canvas = ctx.canvas(size)?;
    canvas.fill_rect((0, 0), (width as i64, (height / 15) as i64), colors.accent);

    TextBlock::centered(
        title,
        ctx.font(FontRole::Heading, DEFAULT_FONT_SIZE),
        colors.text_primary,
    )
    .draw(&mut canvas);

    TextBlock::centered(
        tagline,
        ctx.font(FontRole::Body, DEFAULT_FONT_SIZE),
        colors.text_secondary,
    )
    .offset(TAGLINE_OFFSET)
    .draw(&mut canvas);

    ctx.apply_logo(canvas)
}

/// Generate and save a banner. The tagline defaults to the brand's.
pub fn banner(
    ctx: &Context<'_>,
    title: &str,
    tagline: Option<&str>,
    platform: &str,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let tagline = tagline.unwrap_or(&ctx.brand.tagline);
    let size = ctx.dimensions(platform, AssetKind::Banner);
    let canvas = render_banner(ctx, title, tagline, size)?;

    let path = ctx.output_path(output, &format!("banner_{}", platform));
    ctx.save(&canvas, &path)
}
