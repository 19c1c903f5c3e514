//! Asset generators.
//!
//! Each generator is a fixed pipeline: resolve platform dimensions, create a
//! brand-coloured canvas, draw decorations and text, then save. Generators
//! share a read-only [`Context`] and never share canvases.

mod banner;
mod carousel;
mod social;
mod thumbnail;

use std::path::{Path, PathBuf};

use crate::config::{BrandConfig, FontRole, Settings};
use crate::error::Result;
use crate::export::save_image;
use crate::render::{load_image, overlay_image, resize_image, Canvas, Fit, Font, FontBook};
use crate::types::{AssetKind, OutputFormat};

pub use banner::{banner, render_banner};
pub use carousel::{carousel, render_slide, DEFAULT_SLIDES};
pub use social::{render_social_post, social_post};
pub use thumbnail::{render_thumbnail, thumbnail};

/// Logo role drawn onto generated assets when configured.
pub const WATERMARK_LOGO: &str = "watermark";

/// Read-only configuration shared by every generator call.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub settings: &'a Settings,
    pub brand: &'a BrandConfig,
    pub fonts: &'a FontBook,
}

impl<'a> Context<'a> {
    pub fn new(
        settings: &'a Settings,
        brand: &'a BrandConfig,
        fonts: &'a FontBook,
    ) -> Self {
        Self {
            settings,
            brand,
            fonts,
        }
    }

    /// Dimensions for `platform` and `kind`, falling back to the kind's default.
    pub fn dimensions(&self, platform: &str, kind: AssetKind) -> (u32, u32) {
        self.settings.platforms.resolve(platform, kind)
    }

    /// A canvas filled with the brand background.
    pub fn canvas(&self, size: (u32, u32)) -> Result<Canvas> {
        Canvas::new(size.0, size.1, self.brand.colors.background)
    }

    /// Font for a typography role.
    pub fn font(&self, role: FontRole, size: f32) -> Font {
        self.fonts.font(role, size)
    }

    /// `explicit` if given, else `<output_dir>/<stem>.<format>`.
    pub fn output_path(&self, explicit: Option<&Path>, stem: &str) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => self.settings.output_dir.join(format!(
                "{}.{}",
                stem,
                self.settings.output_format.extension()
            )),
        }
    }

    /// Save a canvas, inferring the format from the path's extension.
    pub fn save(&self, canvas: &Canvas, path: &Path) -> Result<PathBuf> {
        let format = OutputFormat::from_path(path)?;
        save_image(canvas.image(), path, format, self.settings.output_quality)?;
        Ok(path.to_path_buf())
    }

    /// Overlay the brand watermark logo in the bottom-right corner, if set.
    pub fn apply_logo(&self, canvas: Canvas) -> Result<Canvas> {
        let Some(logo_path) = self.brand.logo.get(WATERMARK_LOGO) else {
            return Ok(canvas);
        };
        let logo_path = self.resolve_asset(logo_path);
        let logo = load_image(&logo_path)?;

        let (width, height) = canvas.size();
        let scale = self.brand.defaults.logo_scale;
        let box_w = ((width as f64 * scale) as u32).max(1);
        let box_h = ((height as f64 * scale) as u32).max(1);
        let logo = resize_image(&logo, box_w, box_h, Fit::Contain)?;

        let padding = self.brand.defaults.padding as i64;
        let position = (
            width as i64 - logo.width() as i64 - padding,
            height as i64 - logo.height() as i64 - padding,
        );

        let composed = overlay_image(
            &canvas.to_rgba(),
            &logo,
            position,
            self.brand.defaults.logo_opacity,
        );
        Ok(Canvas::from_image(
            image::DynamicImage::ImageRgba8(composed).to_rgb8(),
        ))
    }

    /// Relative asset paths are tried as given, then under the assets directory.
    fn resolve_asset(&self, path: &Path) -> PathBuf {
        if path.is_relative() && !path.exists() {
            let candidate = self.settings.assets_dir.join(path);
            if candidate.exists() {
                return candidate;
            }
        }
        path.to_path_buf()
    }
}
