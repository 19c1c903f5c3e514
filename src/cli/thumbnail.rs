//! Thumbnail command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::generate;
use crate::output::{dimensions, Printer};
use crate::types::AssetKind;

use super::{report, GlobalArgs, Session};

/// Generate a video thumbnail
#[derive(Args, Debug)]
pub struct ThumbnailArgs {
    /// Title text
    #[arg(long, short)]
    pub title: String,

    /// Target platform
    #[arg(long, short, default_value = "youtube")]
    pub platform: String,

    /// Output file (default: <output>/thumbnail_<platform>.<format>)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ThumbnailArgs, global: &GlobalArgs, printer: &Printer) -> Result<()> {
    let session = Session::load(global, printer)?;
    let ctx = session.context();

    let size = ctx.dimensions(&args.platform, AssetKind::Thumbnail);
    printer.status(
        "Generating",
        &format!("thumbnail for {} ({})", args.platform, dimensions(size)),
    );

    let path = generate::thumbnail(&ctx, &args.title, &args.platform, args.output.as_deref())?;
    report(printer, &[path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::fixtures;
    use tempfile::tempdir;

    #[test]
    fn test_thumbnail_command_writes_file() {
        let dir = tempdir().unwrap();
        let global = fixtures::project(dir.path());

        let args = ThumbnailArgs {
            title: "Python in 10 minutes".to_string(),
            platform: "youtube".to_string(),
            output: None,
        };
        run(args, &global, &Printer::new()).unwrap();

        let path = dir.path().join("out/thumbnail_youtube.png");
        let img = image::open(path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (1280, 720));
    }
}
