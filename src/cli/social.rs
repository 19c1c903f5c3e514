//! Social post command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::generate;
use crate::output::{dimensions, Printer};
use crate::types::AssetKind;

use super::{report, GlobalArgs, Session};

/// Generate a social media post
#[derive(Args, Debug)]
pub struct SocialArgs {
    /// Post text, wrapped to fit
    #[arg(long)]
    pub text: String,

    /// Target platform
    #[arg(long, short, default_value = "instagram")]
    pub platform: String,

    /// Output file (default: <output>/post_<platform>.<format>)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: SocialArgs, global: &GlobalArgs, printer: &Printer) -> Result<()> {
    let session = Session::load(global, printer)?;
    let ctx = session.context();

    let size = ctx.dimensions(&args.platform, AssetKind::Post);
    printer.status(
        "Generating",
        &format!("post for {} ({})", args.platform, dimensions(size)),
    );

    let path = generate::social_post(&ctx, &args.text, &args.platform, args.output.as_deref())?;
    report(printer, &[path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::fixtures;
    use tempfile::tempdir;

    #[test]
    fn test_social_command_writes_file() {
        let dir = tempdir().unwrap();
        let global = fixtures::project(dir.path());

        let args = SocialArgs {
            text: "New cohort starts Monday".to_string(),
            platform: "twitter".to_string(),
            output: None,
        };
        run(args, &global, &Printer::new()).unwrap();

        let img = image::open(dir.path().join("out/post_twitter.png")).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (1200, 675));
    }
}
