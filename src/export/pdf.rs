//! Single-page PDF output.
//!
//! The page is sized 1pt per pixel and holds one JPEG image XObject.

use std::path::PathBuf;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::error::{Result, SigmaError};

/// Build a PDF document wrapping JPEG data of a `width` x `height` RGB image.
pub fn pdf_from_jpeg(jpeg: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let (w, h) = (i64::from(width), i64::from(height));
    let mut doc = Document::with_version("1.4");

    let pages_id = doc.new_object_id();

    let image = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => w,
            "Height" => h,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        jpeg.to_vec(),
    );
    let image_id = doc.add_object(image);

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![w.into(), 0.into(), 0.into(), h.into(), 0.into(), 0.into()],
            ),
            Operation::new("Do", vec!["Im0".into()]),
            Operation::new("Q", vec![]),
        ],
    };
    let content = content.encode().map_err(pdf_error)?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), w.into(), h.into()],
        "Resources" => dictionary! {
            "XObject" => dictionary! { "Im0" => image_id },
        },
        "Contents" => content_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::with_capacity(jpeg.len() + 1024);
    doc.save_to(&mut out).map_err(pdf_error)?;
    Ok(out)
}

fn pdf_error(e: impl std::fmt::Display) -> SigmaError {
    SigmaError::Image {
        path: PathBuf::from("<pdf>"),
        message: format!("Failed to build PDF: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::ObjectId;

    const FAKE_JPEG: &[u8] = b"\xFF\xD8fakejpeg\xFF\xD9";

    fn single_page(doc: &Document) -> ObjectId {
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);
        *pages.values().next().unwrap()
    }

    #[test]
    fn test_pdf_page_matches_image() {
        let bytes = pdf_from_jpeg(FAKE_JPEG, 640, 360).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));

        let doc = Document::load_mem(&bytes).unwrap();
        let page = doc.get_dictionary(single_page(&doc)).unwrap();

        let media_box: Vec<i64> = page
            .get(b"MediaBox")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_i64().unwrap())
            .collect();
        assert_eq!(media_box, vec![0, 0, 640, 360]);
    }

    #[test]
    fn test_pdf_embeds_jpeg_unchanged() {
        let bytes = pdf_from_jpeg(FAKE_JPEG, 2, 3).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let page = doc.get_dictionary(single_page(&doc)).unwrap();

        let image_id = page
            .get(b"Resources")
            .and_then(Object::as_dict)
            .and_then(|r| r.get(b"XObject"))
            .and_then(Object::as_dict)
            .and_then(|x| x.get(b"Im0"))
            .and_then(Object::as_reference)
            .unwrap();
        let image = doc.get_object(image_id).and_then(Object::as_stream).unwrap();

        assert_eq!(image.dict.get(b"Filter").and_then(Object::as_name).unwrap(), b"DCTDecode");
        assert_eq!(image.dict.get(b"Width").and_then(Object::as_i64).unwrap(), 2);
        assert_eq!(image.dict.get(b"Height").and_then(Object::as_i64).unwrap(), 3);
        assert_eq!(image.content, FAKE_JPEG);
    }
}
