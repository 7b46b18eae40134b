//! Document converter
//!
//! Converts a PDF file into an [`ExtractedDocument`]: structured text is
//! read from MuPDF text pages (line quads folded into bounding boxes) and
//! pages are optionally rendered to PNG at the configured scale.

use std::io::Cursor;
use std::path::Path;
use std::time::{Duration, Instant};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use image::DynamicImage;
use mupdf::{Colorspace, Document, Matrix, Page, TextPage, TextPageOptions};
use sha2::{Digest, Sha256};

use crate::engine::document::{
    BoundingBox, DocumentOrigin, ExtractedDocument, PageImage, PageItem, TextItem, SCHEMA_NAME,
    SCHEMA_VERSION,
};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::options::PdfPipelineOptions;

/// Input formats the converter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Pdf,
}

impl InputFormat {
    /// Map a file extension to a supported format (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// MIME type for this format
    pub fn mimetype(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
        }
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub document: ExtractedDocument,
    pub latency: Duration,
}

/// PDF document converter
///
/// Configuration is immutable after construction. Each `convert` call
/// opens a fresh MuPDF document confined to the calling thread, so one
/// converter may serve concurrent callers.
pub struct DocumentConverter {
    options: PdfPipelineOptions,
}

impl DocumentConverter {
    /// Build a converter from validated pipeline options.
    pub fn with_options(options: PdfPipelineOptions) -> EngineResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options this converter was built with.
    pub fn options(&self) -> &PdfPipelineOptions {
        &self.options
    }

    /// Convert the PDF at `path` into an [`ExtractedDocument`].
    ///
    /// The document is named after the file at `path`. Use
    /// [`convert_named`](Self::convert_named) when the on-disk name is a
    /// staging artifact rather than the source name.
    pub fn convert<P: AsRef<Path>>(&self, path: P) -> EngineResult<ConversionResult> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.pdf")
            .to_string();
        self.convert_named(path, &filename)
    }

    /// Convert the PDF at `path`, recording `filename` as the document's
    /// source name.
    ///
    /// The file extension of `path` must map to a supported
    /// [`InputFormat`] before any bytes are read.
    pub fn convert_named<P: AsRef<Path>>(
        &self,
        path: P,
        filename: &str,
    ) -> EngineResult<ConversionResult> {
        let started = Instant::now();
        let path = path.as_ref();

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(InputFormat::from_extension)
            .ok_or_else(|| EngineError::UnsupportedFormat(path.display().to_string()))?;

        let data = std::fs::read(path)?;
        let name = Path::new(filename)
            .file_stem()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();

        let doc = Document::from_bytes(&data, format.mimetype())?;
        let page_count = doc.page_count()? as usize;

        let mut pages = Vec::with_capacity(page_count);
        let mut texts = Vec::new();

        for page_idx in 0..page_count {
            let page = doc.load_page(page_idx as i32)?;
            let bounds = page.bounds()?;
            let width = bounds.x1 - bounds.x0;
            let height = bounds.y1 - bounds.y0;

            let text_page = page.to_text_page(TextPageOptions::PRESERVE_WHITESPACE)?;
            texts.extend(collect_text_items(&text_page, page_idx + 1));

            let image = if self.options.generate_picture_images {
                Some(render_page_image(&page, self.options.images_scale)?)
            } else {
                None
            };

            pages.push(PageItem {
                page_no: page_idx + 1,
                width,
                height,
                image,
            });
        }

        let document = ExtractedDocument {
            schema_name: SCHEMA_NAME.to_string(),
            version: SCHEMA_VERSION.to_string(),
            name,
            origin: DocumentOrigin {
                mimetype: format.mimetype().to_string(),
                binary_hash: binary_hash(&data),
                filename: filename.to_string(),
            },
            pages,
            texts,
        };

        Ok(ConversionResult {
            document,
            latency: started.elapsed(),
        })
    }
}

// Helper functions

/// Fold the text page's block/line/char quads into one item per line.
///
/// Quads arrive in top-left-origin page space, so their coordinates are
/// used as-is.
fn collect_text_items(text_page: &TextPage, page_no: usize) -> Vec<TextItem> {
    let mut items = Vec::new();

    for block in text_page.blocks() {
        for line in block.lines() {
            let mut line_text = String::new();
            let mut line_x = f32::MAX;
            let mut line_y = f32::MAX;
            let mut line_max_x = f32::MIN;
            let mut line_max_y = f32::MIN;

            for ch in line.chars() {
                if let Some(c) = ch.char() {
                    let quad = ch.quad();

                    let char_x = quad.ul.x.min(quad.ll.x);
                    let char_top_y = quad.ul.y.min(quad.ur.y);
                    let char_bottom_y = quad.ll.y.max(quad.lr.y);
                    let char_width = (quad.ur.x.max(quad.lr.x) - char_x).max(0.0);

                    line_x = line_x.min(char_x);
                    line_y = line_y.min(char_top_y);
                    line_max_x = line_max_x.max(char_x + char_width);
                    line_max_y = line_max_y.max(char_bottom_y);

                    line_text.push(c);
                }
            }

            if !line_text.trim().is_empty() {
                items.push(TextItem {
                    page_no,
                    text: line_text,
                    bbox: BoundingBox::new(
                        line_x,
                        line_y,
                        line_max_x - line_x,
                        line_max_y - line_y,
                    ),
                });
            }
        }
    }

    items
}

fn render_page_image(page: &Page, scale: f32) -> EngineResult<PageImage> {
    let matrix = Matrix::new_scale(scale, scale);
    let colorspace = Colorspace::device_rgb();
    let pixmap = page.to_pixmap(&matrix, &colorspace, true, true)?;

    let (png, width, height) = encode_pixmap_png(&pixmap)?;

    Ok(PageImage {
        mimetype: "image/png".to_string(),
        scale,
        width,
        height,
        uri: format!("data:image/png;base64,{}", BASE64.encode(&png)),
    })
}

fn encode_pixmap_png(pixmap: &mupdf::Pixmap) -> EngineResult<(Vec<u8>, u32, u32)> {
    let width = pixmap.width() as u32;
    let height = pixmap.height() as u32;
    let samples = pixmap.samples();
    let n = pixmap.n() as usize;

    // Convert to RGBA buffer
    let mut rgba_buffer = Vec::with_capacity((width * height * 4) as usize);

    for y in 0..height as usize {
        for x in 0..width as usize {
            let offset = (y * width as usize + x) * n;
            let r = samples.get(offset).copied().unwrap_or(0);
            let g = samples.get(offset + 1).copied().unwrap_or(0);
            let b = samples.get(offset + 2).copied().unwrap_or(0);
            let a = if n >= 4 {
                samples.get(offset + 3).copied().unwrap_or(255)
            } else {
                255
            };
            rgba_buffer.extend_from_slice(&[r, g, b, a]);
        }
    }

    let img = image::RgbaImage::from_raw(width, height, rgba_buffer)
        .ok_or_else(|| EngineError::Image("Failed to create image buffer".to_string()))?;

    let mut output = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut output), image::ImageFormat::Png)
        .map_err(|e| EngineError::Image(e.to_string()))?;

    Ok((output, width, height))
}

fn binary_hash(data: &[u8]) -> u64 {
    let digest = Sha256::digest(data);
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}
