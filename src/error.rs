//! Error types for the pdf2txt library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Pdf2TxtError`] — **Fatal**: the job cannot proceed at all (missing
//!   input, unreadable PDF, wrong password, output not writable). Returned
//!   as `Err(Pdf2TxtError)` from [`crate::extract`] and [`crate::run_batch`],
//!   and ends the batch.
//!
//! * [`PageError`] — **Non-fatal**: text extraction failed on a single page.
//!   Stored inside [`crate::output::PageResult`] and rendered as a
//!   placeholder in the output text; the remaining pages are unaffected.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pdf2txt library.
#[derive(Debug, Error)]
pub enum Pdf2TxtError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// pdfium could not parse the document.
    #[error("PDF '{path}' could not be opened: {detail}")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password.\nProvide it with --password <PASSWORD>.")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output text file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Argument / config errors ──────────────────────────────────────────
    /// The path list does not form complete (input, output) pairs.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
Set PDFIUM_LIB_PATH=/path/to/libpdfium, place the library in the working\n\
directory, or install it system-wide.\n"
    )]
    PdfiumBindingFailed(String),
}

/// A non-fatal error for a single page.
///
/// Its `Display` output is embedded in the placeholder that replaces the
/// page's text, so it always names the 1-based page number.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum PageError {
    /// pdfium failed to load the page or its text layer.
    #[error("Page {page}: text extraction failed: {detail}")]
    ExtractionFailed { page: usize, detail: String },
}

impl PageError {
    /// The string written to the output in place of the page's text.
    pub fn placeholder(&self) -> String {
        format!("[{self}]")
    }
}
