//! Configuration types for PDF text extraction.
//!
//! All extraction behaviour is controlled through [`ExtractionConfig`],
//! built via its [`ExtractionConfigBuilder`]. The same config is shared by
//! every job of a batch.

use crate::error::Pdf2TxtError;
use crate::progress::ProgressCallback;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator written between pages unless configured otherwise.
pub const FORM_FEED_SEPARATOR: &str = "\n\n\x0c\n\n";

/// Configuration for extracting text from one or more PDFs.
///
/// # Example
/// ```rust
/// use pdf2txt::{ExtractionConfig, PageSelection};
///
/// let config = ExtractionConfig::builder()
///     .pages(PageSelection::Range(1, 10))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ExtractionConfig {
    /// PDF user password for encrypted documents.
    pub password: Option<String>,

    /// Page selection. Default: all pages.
    pub pages: PageSelection,

    /// Separator between pages in the written text. Default: form feed.
    pub page_separator: PageSeparator,

    /// Create missing parent directories of the output path. Default: true.
    pub create_parent_dirs: bool,

    /// Receives per-document and per-page events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            password: None,
            pages: PageSelection::default(),
            page_separator: PageSeparator::default(),
            create_parent_dirs: true,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("pages", &self.pages)
            .field("page_separator", &self.page_separator)
            .field("create_parent_dirs", &self.create_parent_dirs)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn ExtractionProgressCallback>"),
            )
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn pages(mut self, selection: PageSelection) -> Self {
        self.config.pages = selection;
        self
    }

    pub fn page_separator(mut self, sep: PageSeparator) -> Self {
        self.config.page_separator = sep;
        self
    }

    pub fn create_parent_dirs(mut self, v: bool) -> Self {
        self.config.create_parent_dirs = v;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, Pdf2TxtError> {
        let c = &self.config;
        if let PageSeparator::Custom(s) = &c.page_separator {
            if s.is_empty() {
                return Err(Pdf2TxtError::InvalidConfig(
                    "Custom page separator must not be empty".into(),
                ));
            }
        }
        match &c.pages {
            PageSelection::All => {}
            PageSelection::Single(p) => check_page_number(*p)?,
            PageSelection::Range(start, end) => {
                check_page_number(*start)?;
                check_page_number(*end)?;
                if start > end {
                    return Err(Pdf2TxtError::InvalidConfig(format!(
                        "Invalid page range {start}-{end}: start must be <= end"
                    )));
                }
            }
            PageSelection::Set(pages) => {
                if pages.is_empty() {
                    return Err(Pdf2TxtError::InvalidConfig("Page set is empty".into()));
                }
                for &p in pages {
                    check_page_number(p)?;
                }
            }
        }
        Ok(self.config)
    }
}

fn check_page_number(page: usize) -> Result<(), Pdf2TxtError> {
    if page < 1 {
        return Err(Pdf2TxtError::InvalidConfig(format!(
            "Pages are 1-indexed, minimum is 1 (got {page})"
        )));
    }
    Ok(())
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Specifies which pages of each PDF to extract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSelection {
    /// Extract all pages (default).
    #[default]
    All,
    /// Extract a single page (1-indexed).
    Single(usize),
    /// Extract a contiguous range of pages (1-indexed, inclusive).
    Range(usize, usize),
    /// Extract specific pages (1-indexed, deduplicated).
    Set(Vec<usize>),
}

impl PageSelection {
    /// Expand the selection into a sorted, deduplicated list of 0-indexed page numbers.
    pub fn to_indices(&self, total_pages: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = match self {
            PageSelection::All => (0..total_pages).collect(),
            PageSelection::Single(p) => {
                if *p >= 1 && *p <= total_pages {
                    vec![p - 1]
                } else {
                    vec![]
                }
            }
            PageSelection::Range(start, end) => {
                let s = (*start).max(1) - 1;
                let e = (*end).min(total_pages);
                (s..e).collect()
            }
            PageSelection::Set(pages) => pages
                .iter()
                .filter(|&&p| p >= 1 && p <= total_pages)
                .map(|p| p - 1)
                .collect(),
        };
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    /// Number of distinct pages the selection asks for that `total_pages` cannot satisfy.
    pub fn out_of_range(&self, total_pages: usize) -> usize {
        let requested = match self {
            PageSelection::All => return 0,
            PageSelection::Single(_) => 1,
            PageSelection::Range(start, end) => end.saturating_sub((*start).max(1)) + 1,
            PageSelection::Set(pages) => {
                let mut v = pages.clone();
                v.sort_unstable();
                v.dedup();
                v.len()
            }
        };
        requested.saturating_sub(self.to_indices(total_pages).len())
    }
}

/// How to separate pages in the written text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSeparator {
    /// Blank line, form feed, blank line: `"\n\n\x0c\n\n"`. (default)
    #[default]
    FormFeed,
    /// Custom string inserted verbatim between pages.
    Custom(String),
}

impl PageSeparator {
    pub fn as_str(&self) -> &str {
        match self {
            PageSeparator::FormFeed => FORM_FEED_SEPARATOR,
            PageSeparator::Custom(s) => s,
        }
    }
}
