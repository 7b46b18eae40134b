//! Upload staging
//!
//! The conversion engine consumes filesystem paths, so upload bytes are
//! staged to a named temporary file for the duration of one request.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// An uploaded PDF staged on disk.
///
/// The backing file carries a `.pdf` suffix and lives until this guard is
/// dropped. Dropping removes the file on every exit path; removal of an
/// already-missing file is ignored.
pub struct SpooledPdf {
    file: NamedTempFile,
}

impl SpooledPdf {
    /// Write `data` to a fresh temporary file.
    ///
    /// The file is created in `dir` when given, otherwise in the system
    /// temp directory.
    pub fn create(data: &[u8], dir: Option<&Path>) -> std::io::Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.suffix(".pdf");

        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(data)?;

        Ok(Self { file })
    }

    /// Path handed to the converter.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
