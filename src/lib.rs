//! sigma - Branded marketing asset generator
//!
//! Renders thumbnails, banners, social posts and carousels from a brand
//! definition (colours, fonts, copy) at the dimensions each platform expects,
//! and exports them as PNG, JPEG, WebP or PDF.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod generate;
pub mod output;
pub mod render;
pub mod types;

pub use config::{BrandConfig, Settings};
pub use error::{Result, SigmaError};
pub use export::{save_image, Exporter};
pub use generate::{banner, carousel, social_post, thumbnail, Context};
pub use render::{Canvas, Fit, Font, FontBook};
pub use types::{adjust_brightness, blend_colors, hex_to_rgb, rgb_to_hex, AssetKind, Colour, OutputFormat, PlatformDimensions};
