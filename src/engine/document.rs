//! Exportable document model
//!
//! The converter's output: a serializable tree with document origin,
//! per-page geometry and images, and flat text items with bounding boxes.

use serde::{Deserialize, Serialize};

use crate::engine::error::EngineResult;

pub const SCHEMA_NAME: &str = "ExtractedDocument";
pub const SCHEMA_VERSION: &str = "1.0.0";

/// A converted document, ready for JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Schema name (always `"ExtractedDocument"`)
    pub schema_name: String,

    /// Schema version
    pub version: String,

    /// Document name (source file stem)
    pub name: String,

    /// Document origin information
    pub origin: DocumentOrigin,

    /// Pages in document order
    pub pages: Vec<PageItem>,

    /// Text items across all pages, in reading order
    pub texts: Vec<TextItem>,
}

/// Document origin information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOrigin {
    /// MIME type of the source file
    pub mimetype: String,

    /// Fingerprint of the source bytes
    pub binary_hash: u64,

    /// Source filename
    pub filename: String,
}

/// One page of the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageItem {
    /// Page number, 1-based
    pub page_no: usize,

    /// Page width in points
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Rendered page image, present when picture generation is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<PageImage>,
}

/// A rendered page image embedded as a data URI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageImage {
    /// Image MIME type (always `"image/png"`)
    pub mimetype: String,

    /// Scale factor the page was rendered at
    pub scale: f32,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// `data:` URI with base64 PNG payload
    pub uri: String,
}

/// A line of text with its position on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    /// Page the text appears on, 1-based
    pub page_no: usize,

    /// Text content
    pub text: String,

    /// Position in top-left-origin page coordinates
    pub bbox: BoundingBox,
}

/// Axis-aligned bounding box, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl ExtractedDocument {
    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Full structural export as a JSON value.
    pub fn export_to_value(&self) -> EngineResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> ExtractedDocument {
        ExtractedDocument {
            schema_name: SCHEMA_NAME.to_string(),
            version: SCHEMA_VERSION.to_string(),
            name: "relatorio".to_string(),
            origin: DocumentOrigin {
                mimetype: "application/pdf".to_string(),
                binary_hash: 0xDEAD_BEEF,
                filename: "relatorio.pdf".to_string(),
            },
            pages: vec![
                PageItem {
                    page_no: 1,
                    width: 612.0,
                    height: 792.0,
                    image: None,
                },
                PageItem {
                    page_no: 2,
                    width: 612.0,
                    height: 792.0,
                    image: None,
                },
            ],
            texts: vec![TextItem {
                page_no: 1,
                text: "Resumo".to_string(),
                bbox: BoundingBox::new(72.0, 72.0, 120.0, 14.0),
            }],
        }
    }

    #[test]
    fn test_page_count() {
        assert_eq!(sample_document().page_count(), 2);
    }

    #[test]
    fn test_export_shape() {
        let value = sample_document().export_to_value().unwrap();

        assert_eq!(value["schema_name"], "ExtractedDocument");
        assert_eq!(value["origin"]["filename"], "relatorio.pdf");
        assert_eq!(value["pages"].as_array().unwrap().len(), 2);
        assert_eq!(value["pages"][0]["page_no"], 1);
        assert_eq!(value["texts"][0]["text"], "Resumo");
        assert_eq!(value["texts"][0]["bbox"]["x"], 72.0);
        // Absent images are omitted from the export entirely
        assert!(value["pages"][0].get("image").is_none());
    }

    #[test]
    fn test_export_round_trips() {
        let doc = sample_document();
        let value = doc.export_to_value().unwrap();
        let back: ExtractedDocument = serde_json::from_value(value).unwrap();
        assert_eq!(back, doc);
    }
}
