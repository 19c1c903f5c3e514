//! Configuration loaded once at startup and passed by reference.

mod brand;
mod settings;

pub use brand::{
    BrandConfig, BrandDefaults, BrandPalette, FontRole, Typography, BRAND_FILENAME, BUILTIN_BRAND,
    REQUIRED_COLOUR_ROLES,
};
pub use settings::{Manifest, Settings, MANIFEST_FILENAME};
