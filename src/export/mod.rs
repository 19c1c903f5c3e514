//! Image export.
//!
//! Encodes finished canvases as PNG, JPEG, WebP or PDF. Parent directories
//! are created on demand.

mod pdf;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::RgbImage;

use crate::config::Settings;
use crate::error::{Result, SigmaError};
use crate::types::OutputFormat;

pub use pdf::pdf_from_jpeg;

/// Encode `img` in `format` into `writer`.
///
/// `quality` is clamped to 1-100 for lossy formats and ignored otherwise.
pub fn encode(img: &RgbImage, format: OutputFormat, quality: u8, writer: impl Write) -> Result<()> {
    let quality = if format.is_lossy() { quality.clamp(1, 100) } else { 100 };
    let encode_err = |e: image::ImageError| SigmaError::Image {
        path: PathBuf::from(format!("<{}>", format)),
        message: e.to_string(),
    };

    match format {
        OutputFormat::Png => img.write_with_encoder(PngEncoder::new(writer)).map_err(encode_err),
        OutputFormat::Jpg => img
            .write_with_encoder(JpegEncoder::new_with_quality(writer, quality))
            .map_err(encode_err),
        OutputFormat::Webp => img
            .write_with_encoder(WebPEncoder::new_lossless(writer))
            .map_err(encode_err),
        OutputFormat::Pdf => {
            let mut jpeg = Vec::new();
            img.write_with_encoder(JpegEncoder::new_with_quality(&mut jpeg, quality))
                .map_err(encode_err)?;
            let pdf = pdf_from_jpeg(&jpeg, img.width(), img.height())?;
            let mut writer = writer;
            writer.write_all(&pdf)?;
            Ok(())
        }
    }
}

/// Write `img` to `path`, creating parent directories as needed.
pub fn save_image(img: &RgbImage, path: &Path, format: OutputFormat, quality: u8) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SigmaError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let file = File::create(path).map_err(|e| SigmaError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create file: {}", e),
    })?;
    let mut writer = BufWriter::new(file);

    encode(img, format, quality, &mut writer).map_err(|e| match e {
        SigmaError::Image { message, .. } => SigmaError::Image {
            path: path.to_path_buf(),
            message,
        },
        other => other,
    })?;

    writer.flush().map_err(|e| SigmaError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
    })
}

/// Writes images into the configured output directory.
pub struct Exporter<'a> {
    settings: &'a Settings,
}

impl<'a> Exporter<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Export one image as `<output_dir>/<name>.<ext>` for each format.
    ///
    /// With no formats the configured output format is used. Every format is
    /// validated before anything is written.
    pub fn export<S: AsRef<str>>(
        &self,
        img: &RgbImage,
        name: &str,
        formats: Option<&[S]>,
    ) -> Result<Vec<PathBuf>> {
        let formats = self.resolve_formats(formats)?;

        let mut saved = Vec::with_capacity(formats.len());
        for format in formats {
            let path = self
                .settings
                .output_dir
                .join(format!("{}.{}", name, format.extension()));
            save_image(img, &path, format, self.settings.output_quality)?;
            saved.push(path);
        }

        Ok(saved)
    }

    /// Export several `(image, name)` pairs.
    pub fn export_batch<S: AsRef<str>>(
        &self,
        images: &[(RgbImage, String)],
        formats: Option<&[S]>,
    ) -> Result<Vec<PathBuf>> {
        self.resolve_formats(formats)?;

        let mut saved = Vec::new();
        for (img, name) in images {
            saved.extend(self.export(img, name, formats)?);
        }
        Ok(saved)
    }

    fn resolve_formats<S: AsRef<str>>(&self, formats: Option<&[S]>) -> Result<Vec<OutputFormat>> {
        match formats {
            None => Ok(vec![self.settings.output_format]),
            Some(list) => list.iter().map(|f| f.as_ref().parse()).collect(),
        }
    }
}
