//! Carousel command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SigmaError};
use crate::generate::{self, DEFAULT_SLIDES};
use crate::output::{dimensions, display_path, plural, Printer};
use crate::types::AssetKind;

use super::{report, GlobalArgs, Session};

/// Generate a multi-slide carousel
#[derive(Args, Debug)]
pub struct CarouselArgs {
    /// Title text; slides after the first get a "Part N" suffix
    #[arg(long, short)]
    pub title: String,

    /// Number of slides
    #[arg(long, short = 'n', default_value_t = DEFAULT_SLIDES, allow_negative_numbers = true)]
    pub slides: i64,

    /// Target platform
    #[arg(long, short, default_value = "instagram")]
    pub platform: String,

    /// Output directory (default: <output>/carousel)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: CarouselArgs, global: &GlobalArgs, printer: &Printer) -> Result<()> {
    let session = Session::load(global, printer)?;
    let ctx = session.context();

    let size = ctx.dimensions(&args.platform, AssetKind::Carousel);
    printer.status(
        "Generating",
        &format!(
            "carousel for {} ({}, {})",
            args.platform,
            dimensions(size),
            plural(args.slides.max(0) as usize, "slide", "slides")
        ),
    );

    match generate::carousel(
        &ctx,
        &args.title,
        args.slides,
        &args.platform,
        args.output.as_deref(),
    ) {
        Ok(paths) => report(printer, &paths),
        Err(SigmaError::CarouselIncomplete { written, source }) => {
            for path in &written {
                printer.error("Kept", &display_path(path));
            }
            printer.paths(&written)?;
            Err(SigmaError::CarouselIncomplete { written, source })
        }
        Err(e) => Err(e),
    }
}
