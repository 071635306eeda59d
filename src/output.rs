//! Result types produced by extraction and batch runs.

use crate::error::PageError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// 1-indexed page number.
    pub page_num: usize,
    /// Extracted text; empty when `error` is set.
    pub text: String,
    /// Set when extraction failed for this page.
    pub error: Option<PageError>,
}

impl PageResult {
    /// The string this page contributes to the joined output.
    pub fn rendered(&self) -> String {
        match &self.error {
            None => self.text.clone(),
            Some(e) => e.placeholder(),
        }
    }
}

/// Counters for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Pages in the document.
    pub total_pages: usize,
    /// Selected pages whose text was extracted.
    pub extracted_pages: usize,
    /// Selected pages replaced by a placeholder.
    pub failed_pages: usize,
    /// Selected page numbers the document does not have.
    pub skipped_pages: usize,
    /// Byte length of the joined text.
    pub total_chars: usize,
    pub duration_ms: u64,
}

/// Full in-memory result of extracting one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutput {
    /// Per-page strings joined by the configured separator.
    pub text: String,
    pub pages: Vec<PageResult>,
    pub stats: ExtractionStats,
}

/// One completed job of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: ExtractionStats,
}

/// Summary of a fully completed batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub jobs: Vec<JobReport>,
    pub total_duration_ms: u64,
}

impl BatchReport {
    /// Placeholder pages across all jobs.
    pub fn failed_pages(&self) -> usize {
        self.jobs.iter().map(|j| j.stats.failed_pages).sum()
    }

    /// Successfully extracted pages across all jobs.
    pub fn extracted_pages(&self) -> usize {
        self.jobs.iter().map(|j| j.stats.extracted_pages).sum()
    }
}
