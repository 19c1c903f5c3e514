use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sigma operations
#[derive(Error, Diagnostic, Debug)]
pub enum SigmaError {
    #[error("IO error: {0}")]
    #[diagnostic(code(sigma::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(sigma::io))]
    Io { path: PathBuf, message: String },

    #[error("Invalid colour: '{0}'")]
    #[diagnostic(
        code(sigma::colour),
        help("Use a 6-digit hex colour such as #1a73e8 or 1a73e8")
    )]
    InvalidColorFormat(String),

    #[error("Unsupported format '{format}' (supported: {supported})")]
    #[diagnostic(code(sigma::format))]
    UnsupportedFormat { format: String, supported: String },

    #[error("Invalid slide count: {0}")]
    #[diagnostic(
        code(sigma::carousel),
        help("A carousel needs at least one slide")
    )]
    InvalidSlideCount(i64),

    #[error("Missing config key: {key}")]
    #[diagnostic(code(sigma::config))]
    MissingConfigKey {
        key: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to load font '{name}': {message}")]
    #[diagnostic(code(sigma::font))]
    FontLoad { name: String, message: String },

    #[error("Invalid canvas dimensions {width}x{height}")]
    #[diagnostic(
        code(sigma::canvas),
        help("Width and height must both be positive")
    )]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Parse error: {message}")]
    #[diagnostic(code(sigma::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(sigma::image))]
    Image { path: PathBuf, message: String },

    #[error("{path} already exists")]
    #[diagnostic(code(sigma::init), help("Use --force to overwrite"))]
    AlreadyExists { path: PathBuf },

    #[error("Carousel stopped after {} slide(s)", .written.len())]
    #[diagnostic(code(sigma::carousel))]
    CarouselIncomplete {
        written: Vec<PathBuf>,
        #[source]
        source: Box<SigmaError>,
    },
}

pub type Result<T> = std::result::Result<T, SigmaError>;
