//! PDF conversion engine
//!
//! Wraps MuPDF behind a converter facade: a [`DocumentConverter`] built
//! from [`PdfPipelineOptions`] consumes a filesystem path and produces an
//! [`ExtractedDocument`] with per-page text items and optional rendered
//! page images. [`ConverterHolder`] keeps one converter per process.

mod converter;
mod document;
mod error;
mod holder;
mod options;

pub use converter::{ConversionResult, DocumentConverter, InputFormat};
pub use document::{
    BoundingBox, DocumentOrigin, ExtractedDocument, PageImage, PageItem, TextItem,
};
pub use error::{EngineError, EngineResult};
pub use holder::ConverterHolder;
pub use options::PdfPipelineOptions;
