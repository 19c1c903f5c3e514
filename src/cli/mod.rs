pub mod banner;
pub mod carousel;
pub mod completions;
pub mod export;
pub mod init;
pub mod palette;
pub mod platforms;
pub mod social;
pub mod thumbnail;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::{BrandConfig, Settings, Typography};
use crate::error::Result;
use crate::generate::Context;
use crate::output::{display_path, Printer};
use crate::render::FontBook;

/// sigma - Branded marketing asset generator
#[derive(Parser, Debug)]
#[command(name = "sigma")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Settings file (default: ./sigma.yaml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Brand file (default: ./brand.yaml if present, else the built-in brand)
    #[arg(long, global = true, value_name = "FILE")]
    pub brand: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a video thumbnail
    Thumbnail(thumbnail::ThumbnailArgs),

    /// Generate a channel or profile banner
    Banner(banner::BannerArgs),

    /// Generate a social media post
    Social(social::SocialArgs),

    /// Generate a multi-slide carousel
    Carousel(carousel::CarouselArgs),

    /// Convert an image to one or more formats
    Export(export::ExportArgs),

    /// Show the brand colour palette
    Palette(palette::PaletteArgs),

    /// List platform dimensions
    Platforms(platforms::PlatformsArgs),

    /// Initialize a sigma project (writes sigma.yaml and brand.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Settings, brand and fonts loaded once for a generator command.
pub struct Session {
    pub settings: Settings,
    pub brand: BrandConfig,
    pub fonts: FontBook,
}

impl Session {
    /// Load configuration and resolve fonts, reporting font fallbacks.
    pub fn load(global: &GlobalArgs, printer: &Printer) -> Result<Self> {
        let settings = Settings::load(global.config.as_deref())?;
        let brand = BrandConfig::discover(global.brand.as_deref())?;

        let typography = resolve_typography(&brand.typography, &settings.assets_dir);
        let fonts = FontBook::load(&typography);
        for warning in fonts.warnings() {
            printer.warning("Font", warning);
        }

        Ok(Self {
            settings,
            brand,
            fonts,
        })
    }

    pub fn context(&self) -> Context<'_> {
        Context::new(&self.settings, &self.brand, &self.fonts)
    }
}

/// Font names that exist as files under the assets (or `assets/fonts`)
/// directory are replaced by those paths.
fn resolve_typography(typography: &Typography, assets_dir: &Path) -> Typography {
    let resolve = |name: &Option<String>| {
        name.as_ref().map(|name| {
            [assets_dir.join(name), assets_dir.join("fonts").join(name)]
                .into_iter()
                .find(|candidate| candidate.is_file())
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| name.clone())
        })
    };

    Typography {
        heading_font: resolve(&typography.heading_font),
        body_font: resolve(&typography.body_font),
        accent_font: resolve(&typography.accent_font),
    }
}

/// Report generated files on stderr and print their paths on stdout.
pub(crate) fn report(printer: &Printer, paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        printer.success("Created", &printer.cyan(&display_path(path)));
    }
    printer.paths(paths)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::Path;

    use super::GlobalArgs;
    use crate::generate::fixtures::BRAND;

    /// Write a settings file pointing output at `<dir>/out` plus a brand
    /// file without typography, and return flags that use them.
    pub fn project(dir: &Path) -> GlobalArgs {
        let config = dir.join("sigma.yaml");
        let brand = dir.join("brand.yaml");
        fs::write(
            &config,
            format!("output: {}\nassets: {}\n", dir.join("out").display(), dir.join("assets").display()),
        )
        .unwrap();
        fs::write(&brand, BRAND).unwrap();

        GlobalArgs {
            config: Some(config),
            brand: Some(brand),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sigma",
            "thumbnail",
            "--title",
            "Hello",
            "--json",
            "--brand",
            "b.yaml",
        ])
        .unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.brand, Some(PathBuf::from("b.yaml")));
        assert!(matches!(cli.command, Commands::Thumbnail(_)));
    }

    #[test]
    fn test_resolve_typography_prefers_asset_files() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("fonts")).unwrap();
        fs::write(dir.path().join("fonts/Brand.ttf"), b"").unwrap();

        let typography = Typography {
            heading_font: Some("Brand.ttf".to_string()),
            body_font: Some("Inter".to_string()),
            accent_font: None,
        };
        let resolved = resolve_typography(&typography, dir.path());

        assert_eq!(
            resolved.heading_font,
            Some(dir.path().join("fonts/Brand.ttf").display().to_string())
        );
        assert_eq!(resolved.body_font, Some("Inter".to_string()));
        assert_eq!(resolved.accent_font, None);
    }
}
