//! PDF extraction endpoint
//!
//! One request: validate the upload, stage it to disk, run the converter
//! on a blocking worker, shape the response, release the staged file.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::upload::SpooledPdf;

#[derive(Serialize)]
pub struct ExtractResponse {
    document: Value,
    filename: String,
    pages: usize,
    elapsed_seconds: f64,
}

/// Receive a PDF upload, run the converter, return the document JSON.
pub async fn extract_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        AppError::UploadRead(e.to_string())
    })? {
        let name = field.name().unwrap_or("").to_string();
        if name != "file" {
            continue;
        }

        let filename = match field.file_name() {
            Some(name) if is_pdf_filename(name) => name.to_string(),
            _ => return Err(AppError::InvalidFile),
        };

        let started = Instant::now();

        let data = field.bytes().await.map_err(|e| {
            tracing::error!("Failed to read file data: {}", e);
            AppError::UploadRead(e.to_string())
        })?;

        let response = run_pipeline(&state, filename, data, started).await?;
        return Ok(Json(response));
    }

    Err(AppError::InvalidFile)
}

async fn run_pipeline(
    state: &AppState,
    filename: String,
    data: Bytes,
    started: Instant,
) -> Result<ExtractResponse> {
    let spooled = SpooledPdf::create(&data, state.config().spool.dir.as_deref())
        .map_err(|e| extraction_error(&filename, e))?;

    let converter = state
        .converter()
        .get_or_init()
        .map_err(|e| extraction_error(&filename, e))?
        .clone();

    // The spooled file carries a generated name; the upload's filename is
    // what the exported document must be named after.
    let path = spooled.path().to_path_buf();
    let source_name = filename.clone();
    let result = tokio::task::spawn_blocking(move || converter.convert_named(&path, &source_name))
        .await
        .map_err(|e| extraction_error(&filename, format!("Task join error: {}", e)))?
        .map_err(|e| extraction_error(&filename, e))?;

    let elapsed = started.elapsed().as_secs_f64();
    let page_count = result.document.page_count();

    let document = result
        .document
        .export_to_value()
        .map_err(|e| extraction_error(&filename, e))?;

    tracing::info!(
        "[{}] Extraido em {:.1}s | {} paginas",
        filename,
        elapsed,
        page_count
    );

    Ok(ExtractResponse {
        document,
        filename,
        pages: page_count,
        elapsed_seconds: round2(elapsed),
    })
    // `spooled` drops here, removing the staged file on success and on
    // every error path above
}

fn extraction_error(filename: &str, err: impl std::fmt::Display) -> AppError {
    tracing::error!("Erro ao extrair {}: {}", filename, err);
    AppError::Extraction(err.to_string())
}

fn is_pdf_filename(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".pdf")
}

fn round2(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}
