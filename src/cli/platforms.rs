//! Platforms command implementation.

use std::collections::BTreeMap;
use std::io::{self, Write};

use clap::Args;

use crate::config::Settings;
use crate::error::Result;
use crate::output::{dimensions, plural, Printer};
use crate::types::PlatformDimensions;

use super::GlobalArgs;

/// List platform dimensions
#[derive(Args, Debug)]
pub struct PlatformsArgs {
    /// Only show entries for this platform
    #[arg(long, short)]
    pub platform: Option<String>,
}

pub fn run(args: PlatformsArgs, global: &GlobalArgs, printer: &Printer) -> Result<()> {
    let settings = Settings::load(global.config.as_deref())?;
    let entries = filtered(&settings.platforms, args.platform.as_deref());

    printer.info(
        "Platforms",
        &printer.dim(&plural(entries.len(), "entry", "entries")),
    );

    let mut stdout = io::stdout().lock();
    if printer.is_json() {
        let table: BTreeMap<&str, [u32; 2]> =
            entries.iter().map(|(key, (w, h))| (*key, [*w, *h])).collect();
        writeln!(stdout, "{}", serde_json::to_string(&table).map_err(io::Error::from)?)?;
    } else {
        for (key, size) in &entries {
            writeln!(stdout, "{:<22} {}", key, dimensions(*size))?;
        }
    }

    Ok(())
}

/// Entries whose key starts with `<platform>_`, or all of them.
fn filtered<'a>(table: &'a PlatformDimensions, platform: Option<&str>) -> Vec<(&'a str, (u32, u32))> {
    table
        .iter()
        .filter(|(key, _)| match platform {
            Some(platform) => key
                .strip_prefix(platform)
                .is_some_and(|rest| rest.starts_with('_')),
            None => true,
        })
        .collect()
}
