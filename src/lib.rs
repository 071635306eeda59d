//! # pdf2txt
//!
//! Batch-extract the embedded text of PDF documents into plain-text files.
//!
//! Each job pairs an input PDF with an output path. Pages are read in
//! document order through pdfium; a page whose text cannot be extracted is
//! replaced by a placeholder naming the page and the error, and the rest of
//! the document carries on. Pages are joined with a blank line, a form feed
//! and another blank line (`"\n\n\x0c\n\n"`), the same page break
//! `pdftotext` emits.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input     check the file exists and is readable
//!  ├─ 2. Open      load the document via pdfium (fatal on failure)
//!  ├─ 3. Extract   per-page text, placeholder on page failure
//!  ├─ 4. Assemble  join pages with the separator
//!  └─ 5. Output    write UTF-8 text, replacing any existing file
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2txt::{parse_jobs, run_batch, ExtractionConfig, PdfiumTextSource};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = PdfiumTextSource::bind()?;
//!     let jobs = parse_jobs(["report.pdf", "report.txt", "memo.pdf", "out/memo.txt"])?;
//!     let report = run_batch(&source, &jobs, &ExtractionConfig::default())?;
//!     eprintln!("{} pages extracted, {} failed",
//!         report.extracted_pages(),
//!         report.failed_pages());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `extract_pdf_text` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf2txt = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod batch;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use batch::{parse_jobs, run_batch, Job};
pub use config::{
    ExtractionConfig, ExtractionConfigBuilder, PageSelection, PageSeparator, FORM_FEED_SEPARATOR,
};
pub use error::{PageError, Pdf2TxtError};
pub use extract::{extract, extract_text};
pub use output::{BatchReport, ExtractionOutput, ExtractionStats, JobReport, PageResult};
pub use pipeline::source::{PdfiumTextSource, TextDocument, TextSource};
pub use progress::{ExtractionProgressCallback, NoopProgressCallback, ProgressCallback};
