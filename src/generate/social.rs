//! Social post generator.
//!
//! Posts get a primary-coloured frame, the body text wrapped inside the
//! brand padding starting a third of the way down, and the brand name as a
//! footer.

use std::path::{Path, PathBuf};

use crate::config::FontRole;
use crate::error::Result;
use crate::render::{Canvas, TextBlock, SMALL_FONT_SIZE};
use crate::types::AssetKind;

use super::Context;

const BORDER_STROKE: u32 = 4;

pub fn render_social_post(ctx: &Context<'_>, text: &str, size: (u32, u32)) -> Result<Canvas> {
    let colors = &ctx.brand.colors;
    let padding = ctx.brand.defaults.padding;
    let (width, height) = size;
    let (w, h, pad) = (width as i64, height as i64, padding as i64);

    let mut canvas = ctx.canvas(size)?;

    let border = pad / 2;
    canvas.outline_rect(
        (border, border),
        (w - border, h - border),
        colors.primary,
        BORDER_STROKE,
    );

    TextBlock::wrapped(
        text,
        ctx.font(FontRole::Body, SMALL_FONT_SIZE),
        colors.text_primary,
        width.saturating_sub(padding.saturating_mul(2)),
        (pad, h / 3),
    )
    .draw(&mut canvas);

    TextBlock::wrapped(
        &ctx.brand.name,
        ctx.font(FontRole::Accent, SMALL_FONT_SIZE),
        colors.text_secondary,
        width,
        (pad, h - 2 * pad),
    )
    .draw(&mut canvas);

    ctx.apply_logo(canvas)
}

/// Generate and save a social post for `platform`.
pub fn social_post(
    ctx: &Context<'_>,
    text: &str,
    platform: &str,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let size = ctx.dimensions(platform, AssetKind::Post);
    let canvas = render_social_post(ctx, text, size)?;

    let path = ctx.output_path(output, &format!("post_{}", platform));
    ctx.save(&canvas, &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::fixtures;
    use tempfile::tempdir;

    #[test]
    fn test_social_post_dimensions() {
        let dir = tempdir().unwrap();
        let (settings, brand, fonts) = (fixtures::settings(dir.path()), fixtures::brand(), fixtures::fonts());
        let ctx = Context::new(&settings, &brand, &fonts);

        let result = social_post(&ctx, "Ship it", "instagram", None).unwrap();
        assert_eq!(result, dir.path().join("post_instagram.png"));
        assert_eq!(image::open(&result).unwrap().to_rgb8().dimensions(), (1080, 1080));

        let result = social_post(&ctx, "Ship it", "linkedin", None).unwrap();
        assert_eq!(image::open(&result).unwrap().to_rgb8().dimensions(), (1200, 627));
    }

    #[test]
    fn test_social_post_frame() {
        let dir = tempdir().unwrap();
        let (settings, brand, fonts) = (fixtures::settings(dir.path()), fixtures::brand(), fixtures::fonts());
        let ctx = Context::new(&settings, &brand, &fonts);

        let canvas = render_social_post(&ctx, "", (400, 400)).unwrap();

        // Padding 40 puts the 4px frame at 20..=23 and 377..=380.
        assert_eq!(canvas.get(20, 20), Some(brand.colors.primary));
        assert_eq!(canvas.get(23, 200), Some(brand.colors.primary));
        assert_eq!(canvas.get(380, 380), Some(brand.colors.primary));
        assert_eq!(canvas.get(19, 19), Some(brand.colors.background));
        assert_eq!(canvas.get(24, 200), Some(brand.colors.background));
        assert_eq!(canvas.get(381, 381), Some(brand.colors.background));
    }

    #[test]
    fn test_social_post_text_regions() {
        let dir = tempdir().unwrap();
        let (settings, brand, fonts) = (fixtures::settings(dir.path()), fixtures::brand(), fixtures::fonts());
        let ctx = Context::new(&settings, &brand, &fonts);

        let text = "Twelve weeks of hands-on projects with mentors from industry";
        let canvas = render_social_post(&ctx, text, (400, 400)).unwrap();

        let rows_of = |rgb: [u8; 3]| -> Vec<(u32, u32)> {
            canvas
                .image()
                .enumerate_pixels()
                .filter(|(_, _, p)| p.0 == rgb)
                .map(|(x, y, _)| (x, y))
                .collect()
        };

        // Body text stays inside the padding, from a third of the way down.
        let body = rows_of([255, 255, 255]);
        assert!(!body.is_empty());
        assert!(body.iter().all(|&(x, y)| x >= 40 && x < 360 && y >= 133));

        // Brand name footer starts at height - 2 * padding.
        let footer = rows_of([204, 204, 204]);
        assert!(!footer.is_empty());
        assert!(footer.iter().all(|&(x, y)| x >= 40 && y >= 320));
    }

    #[test]
    fn test_social_post_oversized_padding() {
        let dir = tempdir().unwrap();
        let settings = fixtures::settings(dir.path());
        let mut brand = fixtures::brand();
        brand.defaults.padding = u32::MAX;
        let fonts = fixtures::fonts();
        let ctx = Context::new(&settings, &brand, &fonts);

        let canvas = render_social_post(&ctx, "Still renders", (200, 200)).unwrap();
        assert_eq!(canvas.size(), (200, 200));
    }
}
