//! Font resolution and text rasterization.
//!
//! Each typography role resolves once, in order: an existing font file
//! path, a matching system font, the DejaVu Sans family, then the built-in
//! bitmap face. Every step past the first records a warning.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use image::RgbImage;
use rusttype::{point, Scale};

use crate::config::{FontRole, Typography};
use crate::error::{Result, SigmaError};
use crate::types::Colour;

use super::bitmap;

/// Font size for headings and centered titles.
pub const DEFAULT_FONT_SIZE: f32 = 48.0;

/// Font size for wrapped body copy.
pub const SMALL_FONT_SIZE: f32 = 24.0;

/// Family tried when a configured font cannot be found.
const FALLBACK_FAMILY: &str = "DejaVu Sans";

/// A loaded font face.
pub enum Face {
    /// A TrueType/OpenType face.
    TrueType(rusttype::Font<'static>),
    /// The built-in bitmap face.
    Bitmap,
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::TrueType(_) => f.write_str("Face::TrueType"),
            Face::Bitmap => f.write_str("Face::Bitmap"),
        }
    }
}

/// A face at a specific pixel size.
#[derive(Debug, Clone)]
pub struct Font {
    face: Arc<Face>,
    size: f32,
}

impl Font {
    pub fn new(face: Arc<Face>, size: f32) -> Self {
        Self { face, size }
    }

    /// The built-in bitmap face at `size`.
    pub fn builtin(size: f32) -> Self {
        Self::new(Arc::new(Face::Bitmap), size)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn is_builtin(&self) -> bool {
        matches!(*self.face, Face::Bitmap)
    }

    /// Bounding box `(width, height)` of `text`. Empty text measures `(0, 0)`.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        if text.is_empty() {
            return (0, 0);
        }

        match &*self.face {
            Face::Bitmap => bitmap::measure(text, self.size),
            Face::TrueType(font) => {
                let scale = Scale::uniform(self.size);
                let v_metrics = font.v_metrics(scale);
                let width = font
                    .layout(text, scale, point(0.0, v_metrics.ascent))
                    .last()
                    .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
                    .unwrap_or(0.0);
                let height = v_metrics.ascent - v_metrics.descent;
                (width.ceil().max(0.0) as u32, height.ceil().max(0.0) as u32)
            }
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`, clipped to the image.
    pub fn draw(&self, img: &mut RgbImage, text: &str, x: i64, y: i64, colour: Colour) {
        let (width, height) = (img.width() as i64, img.height() as i64);
        let rgb = colour.to_rgb();

        match &*self.face {
            Face::Bitmap => {
                bitmap::rasterize(text, self.size, x, y, |px, py| {
                    if px >= 0 && py >= 0 && px < width && py < height {
                        img.put_pixel(px as u32, py as u32, image::Rgb(rgb));
                    }
                });
            }
            Face::TrueType(font) => {
                let scale = Scale::uniform(self.size);
                let v_metrics = font.v_metrics(scale);
                let origin = point(x as f32, y as f32 + v_metrics.ascent);

                for glyph in font.layout(text, scale, origin) {
                    let Some(bb) = glyph.pixel_bounding_box() else {
                        continue;
                    };
                    glyph.draw(|gx, gy, coverage| {
                        let px = gx as i64 + bb.min.x as i64;
                        let py = gy as i64 + bb.min.y as i64;
                        if px < 0 || py < 0 || px >= width || py >= height || coverage <= 0.0 {
                            return;
                        }
                        let dst = img.get_pixel_mut(px as u32, py as u32);
                        let inv = 1.0 - coverage;
                        for i in 0..3 {
                            dst.0[i] = (rgb[i] as f32 * coverage + dst.0[i] as f32 * inv) as u8;
                        }
                    });
                }
            }
        }
    }
}

/// Fonts resolved for each typography role.
#[derive(Debug, Clone)]
pub struct FontBook {
    faces: HashMap<FontRole, Arc<Face>>,
    warnings: Vec<String>,
}

impl FontBook {
    /// A font book that uses the bitmap face for every role.
    pub fn builtin() -> Self {
        Self {
            faces: HashMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Resolve every typography role, recovering from load failures.
    pub fn load(typography: &Typography) -> Self {
        let mut resolver = Resolver::default();
        let mut book = Self::builtin();

        for role in [FontRole::Heading, FontRole::Body, FontRole::Accent] {
            let label = role_label(role);
            let requested = typography.font_for(role);

            let face = match requested.map(|name| resolver.load(name)) {
                Some(Ok(face)) => Some(face),
                Some(Err(e)) => {
                    book.warnings.push(format!("{} ({})", e, label));
                    None
                }
                None => None,
            };

            let face = face.or_else(|| resolver.fallback());
            match face {
                Some(face) => {
                    book.faces.insert(role, face);
                }
                None => book
                    .warnings
                    .push(format!("no system font for {}, using built-in face", label)),
            }
        }

        book
    }

    /// The font for `role` at `size`.
    pub fn font(&self, role: FontRole, size: f32) -> Font {
        match self.faces.get(&role) {
            Some(face) => Font::new(Arc::clone(face), size),
            None => Font::builtin(size),
        }
    }

    /// Fallbacks taken while loading.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

fn role_label(role: FontRole) -> &'static str {
    match role {
        FontRole::Heading => "heading_font",
        FontRole::Body => "body_font",
        FontRole::Accent => "accent_font",
    }
}

/// Loads faces by path or name, sharing one system font database.
#[derive(Default)]
struct Resolver {
    db: Option<fontdb::Database>,
    cache: HashMap<String, Arc<Face>>,
    fallback: Option<Option<Arc<Face>>>,
}

impl Resolver {
    fn database(&mut self) -> &fontdb::Database {
        self.db.get_or_insert_with(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            db
        })
    }

    fn load(&mut self, name: &str) -> Result<Arc<Face>> {
        if let Some(face) = self.cache.get(name) {
            return Ok(Arc::clone(face));
        }

        let path = Path::new(name);
        let face = if path.is_file() {
            let data = std::fs::read(path).map_err(|e| SigmaError::FontLoad {
                name: name.to_string(),
                message: e.to_string(),
            })?;
            parse_face(name, data, 0)?
        } else {
            self.load_system(name)?
        };

        let face = Arc::new(face);
        self.cache.insert(name.to_string(), Arc::clone(&face));
        Ok(face)
    }

    /// Find a system face by file stem, PostScript name, or family name.
    fn load_system(&mut self, name: &str) -> Result<Face> {
        let stem = Path::new(name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name)
            .to_string();

        let db = self.database();
        let by_name = db
            .faces()
            .find(|face| {
                face.post_script_name.eq_ignore_ascii_case(&stem)
                    || face.families.iter().any(|(family, _)| family.eq_ignore_ascii_case(&stem))
                    || matches!(&face.source, fontdb::Source::File(p)
                        if p.file_name().and_then(|f| f.to_str()) == Some(name))
            })
            .map(|face| face.id);

        let id = by_name.or_else(|| {
            db.query(&fontdb::Query {
                families: &[fontdb::Family::Name(&stem)],
                weight: fontdb::Weight::NORMAL,
                stretch: fontdb::Stretch::Normal,
                style: fontdb::Style::Normal,
            })
        });

        let id = id.ok_or_else(|| SigmaError::FontLoad {
            name: name.to_string(),
            message: "not found".to_string(),
        })?;

        db.with_face_data(id, |data, index| parse_face(name, data.to_vec(), index))
            .unwrap_or_else(|| {
                Err(SigmaError::FontLoad {
                    name: name.to_string(),
                    message: "face data unavailable".to_string(),
                })
            })
    }

    /// The shared fallback face, resolved at most once.
    fn fallback(&mut self) -> Option<Arc<Face>> {
        if let Some(cached) = &self.fallback {
            return cached.clone();
        }
        let face = self.load(FALLBACK_FAMILY).ok();
        self.fallback = Some(face.clone());
        face
    }
}

fn parse_face(name: &str, data: Vec<u8>, index: u32) -> Result<Face> {
    rusttype::Font::try_from_vec_and_index(data, index)
        .map(Face::TrueType)
        .ok_or_else(|| SigmaError::FontLoad {
            name: name.to_string(),
            message: "not a valid TrueType/OpenType font".to_string(),
        })
}
