//! Init command implementation.
//!
//! Writes a starter `sigma.yaml` and `brand.yaml` and creates the output
//! and assets directories.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{Manifest, BRAND_FILENAME, BUILTIN_BRAND, MANIFEST_FILENAME};
use crate::error::{Result, SigmaError};
use crate::output::{display_path, plural, Printer};

/// Initialize a sigma project
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing sigma.yaml and brand.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);
    let brand_path = args.path.join(BRAND_FILENAME);

    if !args.force {
        if let Some(existing) = [&manifest_path, &brand_path].into_iter().find(|p| p.exists()) {
            return Err(SigmaError::AlreadyExists {
                path: existing.clone(),
            });
        }
    }

    let manifest = Manifest::default();
    let yaml = serde_yaml::to_string(&manifest).map_err(|e| SigmaError::Parse {
        message: format!("Failed to serialize settings: {}", e),
        help: None,
    })?;

    write_file(&manifest_path, &yaml)?;
    write_file(&brand_path, BUILTIN_BRAND)?;

    let dirs = [args.path.join(&manifest.output), args.path.join(&manifest.assets)];
    for dir in &dirs {
        fs::create_dir_all(dir).map_err(|e| SigmaError::Io {
            path: dir.clone(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    printer.success(
        "Created",
        &format!(
            "{}, {} ({})",
            display_path(&manifest_path),
            display_path(&brand_path),
            plural(dirs.len(), "directory", "directories")
        ),
    );

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SigmaError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    fs::write(path, content).map_err(|e| SigmaError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}
