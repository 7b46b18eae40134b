//! Converter singleton
//!
//! Building a [`DocumentConverter`] is the expensive step of the service,
//! so one instance is shared by the whole process. The holder is warmed at
//! startup and consulted by every extraction request.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::engine::converter::DocumentConverter;
use crate::engine::error::EngineResult;
use crate::engine::options::PdfPipelineOptions;

/// Process-wide holder for the document converter.
///
/// Construction is single-flight: concurrent first callers block while one
/// of them runs the constructor, and a successful build is permanent for
/// the process lifetime. A failed build leaves the holder empty so a later
/// call may retry.
pub struct ConverterHolder {
    options: PdfPipelineOptions,
    cell: OnceCell<Arc<DocumentConverter>>,
}

impl ConverterHolder {
    pub fn new(options: PdfPipelineOptions) -> Self {
        Self {
            options,
            cell: OnceCell::new(),
        }
    }

    /// Get the converter, building it on the first call.
    pub fn get_or_init(&self) -> EngineResult<&Arc<DocumentConverter>> {
        self.cell.get_or_try_init(|| {
            let converter = DocumentConverter::with_options(self.options)?;
            tracing::info!("DocumentConverter inicializado");
            Ok(Arc::new(converter))
        })
    }

    /// Whether the converter has been built. Never triggers construction.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}
