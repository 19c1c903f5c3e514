//! Export command implementation.
//!
//! Converts an existing image into the configured output directory, with an
//! optional resize first.

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{Result, SigmaError};
use crate::export::Exporter;
use crate::output::{display_path, plural, Printer};
use crate::render::{load_image, resize_image, Fit};

use super::{report, GlobalArgs};

/// Convert an image to one or more formats
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Source image
    pub input: PathBuf,

    /// Output formats, comma separated (default: the configured format)
    #[arg(long, short, value_delimiter = ',')]
    pub format: Vec<String>,

    /// Output file stem (default: the input's stem)
    #[arg(long)]
    pub name: Option<String>,

    /// Resize to this width (requires --height)
    #[arg(long, requires = "height")]
    pub width: Option<u32>,

    /// Resize to this height (requires --width)
    #[arg(long, requires = "width")]
    pub height: Option<u32>,

    /// How the image is fitted when resizing
    #[arg(long, value_enum, default_value_t = Fit::Cover)]
    pub fit: Fit,
}

pub fn run(args: ExportArgs, global: &GlobalArgs, printer: &Printer) -> Result<()> {
    let settings = Settings::load(global.config.as_deref())?;

    let name = match &args.name {
        Some(name) => name.clone(),
        None => args
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .ok_or_else(|| SigmaError::Parse {
                message: format!("Cannot derive a name from '{}'", args.input.display()),
                help: Some("Pass --name".to_string()),
            })?,
    };

    printer.status("Loading", &display_path(&args.input));
    let mut img = load_image(&args.input)?;

    if let (Some(width), Some(height)) = (args.width, args.height) {
        printer.status("Resizing", &format!("to {}x{} ({:?})", width, height, args.fit));
        img = resize_image(&img, width, height, args.fit)?;
    }
    let img = image::DynamicImage::ImageRgba8(img).to_rgb8();

    let formats = (!args.format.is_empty()).then_some(args.format.as_slice());
    let paths = Exporter::new(&settings).export(&img, &name, formats)?;

    printer.info("Exported", &plural(paths.len(), "file", "files"));
    report(printer, &paths)
}
