//! Brand configuration (brand.yaml).
//!
//! # Example
//!
//! ```yaml
//! brand:
//!   name: Codebasics
//!   tagline: Learn data and AI skills
//! colors:
//!   primary: "#1a73e8"
//!   accent: "#fbbc04"
//!   background: "#0f172a"
//!   text_primary: "#ffffff"
//!   text_secondary: "#cbd5e1"
//! typography:
//!   heading_font: Inter-Bold.ttf
//! defaults:
//!   padding: 60
//! ```
//!
//! Colours are parsed and required keys checked at load time, so generators
//! never see a half-valid brand.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SigmaError};
use crate::types::Colour;

/// Default brand file name.
pub const BRAND_FILENAME: &str = "brand.yaml";

/// Brand file shipped with sigma, used when no brand.yaml is found.
pub const BUILTIN_BRAND: &str = include_str!("../../config/brand.yaml");

/// Colour roles every brand must define.
pub const REQUIRED_COLOUR_ROLES: [&str; 5] =
    ["primary", "accent", "background", "text_primary", "text_secondary"];

/// Font names per typography role. Absent roles use the fallback font.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
    pub accent_font: Option<String>,
}

/// Typography role used when placing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Heading,
    Body,
    Accent,
}

impl Typography {
    /// Font name configured for a role.
    pub fn font_for(&self, role: FontRole) -> Option<&str> {
        match role {
            FontRole::Heading => self.heading_font.as_deref(),
            FontRole::Body => self.body_font.as_deref(),
            FontRole::Accent => self.accent_font.as_deref(),
        }
    }
}

/// Parsed brand colours.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandPalette {
    pub primary: Colour,
    pub accent: Colour,
    pub background: Colour,
    pub text_primary: Colour,
    pub text_secondary: Colour,
    /// Any additional roles defined in the brand file.
    pub extra: BTreeMap<String, Colour>,
}

impl BrandPalette {
    /// All roles, required ones first, then extras by name.
    pub fn roles(&self) -> Vec<(&str, Colour)> {
        let mut roles = vec![
            ("primary", self.primary),
            ("accent", self.accent),
            ("background", self.background),
            ("text_primary", self.text_primary),
            ("text_secondary", self.text_secondary),
        ];
        roles.extend(self.extra.iter().map(|(k, v)| (k.as_str(), *v)));
        roles
    }
}

/// Layout defaults from the brand file.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandDefaults {
    /// Edge padding in pixels.
    pub padding: u32,
    /// Logo width as a fraction of the canvas width.
    pub logo_scale: f64,
    /// Logo opacity (0-1).
    pub logo_opacity: f64,
}

/// A loaded, validated brand.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandConfig {
    pub name: String,
    pub tagline: String,
    pub colors: BrandPalette,
    pub typography: Typography,
    /// Logo image paths by role (e.g. `watermark`).
    pub logo: BTreeMap<String, PathBuf>,
    pub defaults: BrandDefaults,
}

#[derive(Debug, Deserialize)]
struct RawBrand {
    #[serde(default)]
    brand: RawIdentity,
    #[serde(default)]
    colors: BTreeMap<String, String>,
    #[serde(default)]
    typography: Typography,
    #[serde(default)]
    logo: BTreeMap<String, PathBuf>,
    #[serde(default)]
    defaults: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawIdentity {
    name: Option<String>,
    tagline: Option<String>,
}

impl BrandConfig {
    /// Load a brand from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SigmaError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read brand config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// The brand that ships with sigma.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_BRAND)
    }

    /// Load `path` if given, else `brand.yaml` in the working directory if
    /// present, else the built-in brand.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let local = Path::new(BRAND_FILENAME);
                if local.exists() {
                    Self::load(local)
                } else {
                    Self::builtin()
                }
            }
        }
    }

    /// Parse and validate a brand from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawBrand = serde_yaml::from_str(content).map_err(|e| SigmaError::Parse {
            message: format!("Invalid brand config: {}", e),
            help: Some(format!("Check {} syntax", BRAND_FILENAME)),
        })?;

        let name = raw.brand.name.ok_or_else(|| missing("brand.name"))?;
        let tagline = raw.brand.tagline.ok_or_else(|| missing("brand.tagline"))?;

        let colors = parse_palette(&raw.colors)?;
        let defaults = parse_defaults(&raw.defaults)?;

        Ok(Self {
            name,
            tagline,
            colors,
            typography: raw.typography,
            logo: raw.logo,
            defaults,
        })
    }
}

fn missing(key: &str) -> SigmaError {
    SigmaError::MissingConfigKey {
        key: key.to_string(),
        help: Some(format!("Add '{}' to {}", key, BRAND_FILENAME)),
    }
}

fn parse_palette(colors: &BTreeMap<String, String>) -> Result<BrandPalette> {
    let role = |name: &str| -> Result<Colour> {
        let hex = colors
            .get(name)
            .ok_or_else(|| missing(&format!("colors.{}", name)))?;
        Colour::from_hex(hex)
    };

    let mut extra = BTreeMap::new();
    for (name, hex) in colors {
        if !REQUIRED_COLOUR_ROLES.contains(&name.as_str()) {
            extra.insert(name.clone(), Colour::from_hex(hex)?);
        }
    }

    Ok(BrandPalette {
        primary: role("primary")?,
        accent: role("accent")?,
        background: role("background")?,
        text_primary: role("text_primary")?,
        text_secondary: role("text_secondary")?,
        extra,
    })
}

fn parse_defaults(defaults: &BTreeMap<String, serde_yaml::Value>) -> Result<BrandDefaults> {
    let padding = defaults
        .get("padding")
        .ok_or_else(|| missing("defaults.padding"))?;
    let padding = padding
        .as_u64()
        .and_then(|p| u32::try_from(p).ok())
        .ok_or_else(|| SigmaError::Parse {
            message: format!("defaults.padding must be a non-negative integer, got {:?}", padding),
            help: None,
        })?;

    let fraction = |key: &str, fallback: f64| -> Result<f64> {
        match defaults.get(key) {
            None => Ok(fallback),
            Some(value) => value.as_f64().ok_or_else(|| SigmaError::Parse {
                message: format!("defaults.{} must be a number, got {:?}", key, value),
                help: None,
            }),
        }
    };

    Ok(BrandDefaults {
        padding,
        logo_scale: fraction("logo_scale", 0.12)?,
        logo_opacity: fraction("logo_opacity", 1.0)?.clamp(0.0, 1.0),
    })
}
