//! Output image formats.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SigmaError};

/// A supported output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    Png,
    Jpg,
    Webp,
    Pdf,
}

impl OutputFormat {
    /// All supported formats, in preference order.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Png,
        OutputFormat::Jpg,
        OutputFormat::Webp,
        OutputFormat::Pdf,
    ];

    /// File extension (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Webp => "webp",
            OutputFormat::Pdf => "pdf",
        }
    }

    /// Whether the output quality setting applies. PDF pages embed JPEG.
    pub fn is_lossy(self) -> bool {
        matches!(self, OutputFormat::Jpg | OutputFormat::Pdf)
    }

    /// Comma-separated list of supported extensions.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|f| f.extension())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Infer the format from a path's extension.
    ///
    /// Extensions match case-insensitively and `.jpeg` is read as jpg.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_ascii_lowercase().as_str() {
            "jpeg" => Ok(OutputFormat::Jpg),
            lower => lower.parse().map_err(|_| Self::unsupported(ext)),
        }
    }

    fn unsupported(format: &str) -> SigmaError {
        SigmaError::UnsupportedFormat {
            format: format.to_string(),
            supported: Self::supported_list(),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = SigmaError;

    /// Only the exact lowercase names in [`OutputFormat::ALL`] are accepted.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.extension() == s)
            .ok_or_else(|| Self::unsupported(s))
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = SigmaError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<OutputFormat> for String {
    fn from(f: OutputFormat) -> Self {
        f.extension().to_string()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported() {
        assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("jpg".parse::<OutputFormat>().unwrap(), OutputFormat::Jpg);
        assert_eq!("webp".parse::<OutputFormat>().unwrap(), OutputFormat::Webp);
        assert_eq!("pdf".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
    }

    #[test]
    fn test_parse_rejects_aliases_and_case() {
        for name in ["jpeg", "PNG", "Jpg", " png", "webp "] {
            match name.parse::<OutputFormat>() {
                Err(SigmaError::UnsupportedFormat { format, .. }) => assert_eq!(format, name),
                other => panic!("{:?} parsed as {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_parse_unsupported_names_format() {
        let err = "bmp".parse::<OutputFormat>().unwrap_err();
        match &err {
            SigmaError::UnsupportedFormat { format, supported } => {
                assert_eq!(format, "bmp");
                assert_eq!(supported, "png, jpg, webp, pdf");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("'bmp'"));
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out/thumb.webp")).unwrap(),
            OutputFormat::Webp
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out/thumb.JPEG")).unwrap(),
            OutputFormat::Jpg
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out/thumb.PNG")).unwrap(),
            OutputFormat::Png
        );
        assert!(OutputFormat::from_path(Path::new("out/thumb")).is_err());
        assert!(OutputFormat::from_path(Path::new("out/thumb.bmp")).is_err());
    }

    #[test]
    fn test_lossy_formats() {
        let lossy: Vec<_> = OutputFormat::ALL.iter().filter(|f| f.is_lossy()).collect();
        assert_eq!(lossy, vec![&OutputFormat::Jpg, &OutputFormat::Pdf]);
    }
}
