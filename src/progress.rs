//! Progress-callback trait for per-document and per-page extraction events.
//!
//! Inject an [`Arc<dyn ExtractionProgressCallback>`] via
//! [`crate::config::ExtractionConfigBuilder::progress_callback`] to receive
//! events as the batch runs. The CLI uses this to drive its progress bar;
//! library callers can forward the events wherever they like.
//!
//! # Example
//!
//! ```rust
//! use pdf2txt::{ExtractionConfig, ExtractionProgressCallback};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct FailureCounter {
//!     failed: AtomicUsize,
//! }
//!
//! impl ExtractionProgressCallback for FailureCounter {
//!     fn on_page_error(&self, page_num: usize, total_pages: usize, error: &str) {
//!         self.failed.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("page {page_num}/{total_pages}: {error}");
//!     }
//! }
//!
//! let config = ExtractionConfig::builder()
//!     .progress_callback(Arc::new(FailureCounter { failed: AtomicUsize::new(0) }))
//!     .build()
//!     .unwrap();
//! ```

use std::path::Path;
use std::sync::Arc;

/// Called by the extractor as it works through the batch.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Events arrive in order on the calling thread.
pub trait ExtractionProgressCallback: Send + Sync {
    /// Called once before the first job starts.
    fn on_batch_start(&self, total_jobs: usize) {
        let _ = total_jobs;
    }

    /// Called after a document opened successfully.
    ///
    /// # Arguments
    /// * `input`       — path of the PDF
    /// * `total_pages` — number of pages that will be extracted
    fn on_document_start(&self, input: &Path, total_pages: usize) {
        let _ = (input, total_pages);
    }

    /// Called when a page's text was extracted.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — pages selected in this document
    /// * `text_len`    — byte length of the extracted text
    fn on_page_complete(&self, page_num: usize, total_pages: usize, text_len: usize) {
        let _ = (page_num, total_pages, text_len);
    }

    /// Called when a page's text could not be extracted.
    fn on_page_error(&self, page_num: usize, total_pages: usize, error: &str) {
        let _ = (page_num, total_pages, error);
    }

    /// Called once all selected pages of a document were attempted.
    fn on_document_complete(&self, input: &Path, extracted: usize, total_pages: usize) {
        let _ = (input, extracted, total_pages);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ExtractionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ExtractionConfig`].
pub type ProgressCallback = Arc<dyn ExtractionProgressCallback>;
