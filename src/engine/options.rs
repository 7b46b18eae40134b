//! Converter pipeline options

use crate::engine::error::{EngineError, EngineResult};

/// Options controlling the PDF conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfPipelineOptions {
    /// Render each page to a PNG embedded in the document export.
    pub generate_picture_images: bool,
    /// Scale factor applied when rendering page images (1.0 = 72 dpi).
    pub images_scale: f32,
    /// Table structure detection toggle; no consumer in the MuPDF pipeline.
    pub do_table_structure: bool,
    /// OCR toggle; no consumer in the MuPDF pipeline.
    pub do_ocr: bool,
}

impl Default for PdfPipelineOptions {
    fn default() -> Self {
        Self {
            generate_picture_images: true,
            images_scale: 2.0,
            do_table_structure: true,
            do_ocr: false,
        }
    }
}

impl PdfPipelineOptions {
    /// Enable or disable page image generation.
    pub fn with_picture_images(mut self, enabled: bool) -> Self {
        self.generate_picture_images = enabled;
        self
    }

    /// Set the page image scale factor.
    pub fn with_images_scale(mut self, scale: f32) -> Self {
        self.images_scale = scale;
        self
    }

    /// Enable or disable table structure detection.
    pub fn with_table_structure(mut self, enabled: bool) -> Self {
        self.do_table_structure = enabled;
        self
    }

    /// Enable or disable OCR.
    pub fn with_ocr(mut self, enabled: bool) -> Self {
        self.do_ocr = enabled;
        self
    }

    /// Reject option combinations the renderer cannot honor.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.images_scale.is_finite() || self.images_scale <= 0.0 {
            return Err(EngineError::InvalidOptions(format!(
                "images_scale must be a positive number, got {}",
                self.images_scale
            )));
        }
        Ok(())
    }
}
