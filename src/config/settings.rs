//! Application settings (sigma.yaml).
//!
//! Settings cover where and how images are written and the platform
//! dimension table. Values come from an optional manifest, then the
//! `OUTPUT_DIR`, `OUTPUT_FORMAT` and `OUTPUT_QUALITY` environment variables.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SigmaError};
use crate::types::{OutputFormat, PlatformDimensions};

/// Default manifest file name.
pub const MANIFEST_FILENAME: &str = "sigma.yaml";

/// Settings manifest as written on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for generated assets.
    pub output: PathBuf,

    /// Default output format.
    pub format: OutputFormat,

    /// Quality for lossy formats, clamped to 1-100.
    pub quality: i64,

    /// Directory holding logos and other source images.
    pub assets: PathBuf,

    /// Extra or overriding platform dimensions, e.g. `tiktok_post: [1080, 1920]`.
    pub platforms: BTreeMap<String, (u32, u32)>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: PathBuf::from("output"),
            format: OutputFormat::Png,
            quality: 95,
            assets: PathBuf::from("assets"),
            platforms: BTreeMap::new(),
        }
    }
}

impl Manifest {
    /// Load a manifest from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SigmaError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a manifest from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| SigmaError::Parse {
            message: format!("Invalid settings: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }
}

/// Resolved, read-only settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub output_format: OutputFormat,
    pub output_quality: u8,
    pub assets_dir: PathBuf,
    pub platforms: PlatformDimensions,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_manifest(Manifest::default())
    }
}

impl Settings {
    /// Build settings from a manifest, merging its platform overrides.
    pub fn from_manifest(manifest: Manifest) -> Self {
        Self {
            output_dir: manifest.output,
            output_format: manifest.format,
            output_quality: clamp_quality(manifest.quality),
            assets_dir: manifest.assets,
            platforms: PlatformDimensions::builtin().merged(&manifest.platforms),
        }
    }

    /// Load settings for a run.
    ///
    /// Uses `path` when given, otherwise `sigma.yaml` in the working directory
    /// if present, otherwise defaults. Environment overrides apply last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let manifest = match path {
            Some(path) => Manifest::load(path)?,
            None => {
                let local = Path::new(MANIFEST_FILENAME);
                if local.exists() {
                    Manifest::load(local)?
                } else {
                    Manifest::default()
                }
            }
        };

        Self::from_manifest(manifest).with_env(|key| std::env::var(key).ok())
    }

    /// Apply `OUTPUT_DIR`, `OUTPUT_FORMAT` and `OUTPUT_QUALITY` overrides.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(dir) = lookup("OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }

        if let Some(format) = lookup("OUTPUT_FORMAT") {
            self.output_format = format.parse()?;
        }

        if let Some(quality) = lookup("OUTPUT_QUALITY") {
            let parsed: i64 = quality.trim().parse().map_err(|_| SigmaError::Parse {
                message: format!("Invalid OUTPUT_QUALITY: '{}'", quality),
                help: Some("Use an integer between 1 and 100".to_string()),
            })?;
            self.output_quality = clamp_quality(parsed);
        }

        Ok(self)
    }
}

fn clamp_quality(quality: i64) -> u8 {
    quality.clamp(1, 100) as u8
}
