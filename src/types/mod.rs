//! Core value types: colours, output formats, and platform dimensions.

mod colour;
mod format;
mod platform;

pub use colour::{adjust_brightness, blend_colors, clamp_channels, hex_to_rgb, rgb_to_hex, Colour};
pub use format::OutputFormat;
pub use platform::{AssetKind, PlatformDimensions};
