//! Banner command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::generate;
use crate::output::{dimensions, Printer};
use crate::types::AssetKind;

use super::{report, GlobalArgs, Session};

/// Generate a channel or profile banner
#[derive(Args, Debug)]
pub struct BannerArgs {
    /// Title text
    #[arg(long, short)]
    pub title: String,

    /// Tagline (default: the brand tagline)
    #[arg(long)]
    pub tagline: Option<String>,

    /// Target platform
    #[arg(long, short, default_value = "youtube")]
    pub platform: String,

    /// Output file (default: <output>/banner_<platform>.<format>)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: BannerArgs, global: &GlobalArgs, printer: &Printer) -> Result<()> {
    let session = Session::load(global, printer)?;
    let ctx = session.context();

    let size = ctx.dimensions(&args.platform, AssetKind::Banner);
    printer.status(
        "Generating",
        &format!("banner for {} ({})", args.platform, dimensions(size)),
    );

    let path = generate::banner(
        &ctx,
        &args.title,
        args.tagline.as_deref(),
        &args.platform,
        args.output.as_deref(),
    )?;
    report(printer, &[path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::fixtures;
    use tempfile::tempdir;

    #[test]
    fn test_banner_command_explicit_output() {
        let dir = tempdir().unwrap();
        let global = fixtures::project(dir.path());
        let output = dir.path().join("custom/banner.webp");

        let args = BannerArgs {
            title: "Data Engineering".to_string(),
            tagline: None,
            platform: "linkedin".to_string(),
            output: Some(output.clone()),
        };
        run(args, &global, &Printer::new()).unwrap();

        let img = image::open(&output).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (1584, 396));
    }
}
