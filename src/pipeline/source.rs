//! PDF text source: open a document and pull plain text out of each page.
//!
//! The extractor only talks to the [`TextSource`] / [`TextDocument`] pair,
//! so the pdfium-backed implementation below can be swapped for a scripted
//! one in tests, the same way a pre-built provider can be injected into a
//! conversion config.
//!
//! ## Binding pdfium
//!
//! pdfium is a C++ library loaded at runtime. [`PdfiumTextSource::bind`]
//! looks for it in this order and stops at the first hit:
//!
//! 1. `PDFIUM_LIB_PATH` — explicit path to `libpdfium.so` / `.dylib` / `pdfium.dll`
//! 2. the platform library name in the current working directory
//! 3. the system library search path
//!
//! Bind once per process and reuse the source for every job.

use crate::error::Pdf2TxtError;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Something that can open a PDF for text extraction.
pub trait TextSource {
    /// Open the document at `path`.
    ///
    /// Fails when the document cannot be loaded at all; a document that
    /// opens but has unreadable pages must still open successfully.
    fn open<'a>(
        &'a self,
        path: &Path,
        password: Option<&'a str>,
    ) -> Result<Box<dyn TextDocument + 'a>, Pdf2TxtError>;
}

/// An opened document.
pub trait TextDocument {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Plain text of the page at 0-based `index`.
    ///
    /// The error is a human-readable description of why this page failed.
    fn page_text(&self, index: usize) -> Result<String, String>;
}

/// [`TextSource`] backed by a bound pdfium library.
pub struct PdfiumTextSource {
    pdfium: Pdfium,
}

impl PdfiumTextSource {
    /// Bind to pdfium using the lookup order described in the module docs.
    pub fn bind() -> Result<Self, Pdf2TxtError> {
        let bindings = match std::env::var("PDFIUM_LIB_PATH") {
            Ok(p) if !p.is_empty() => {
                debug!("Binding pdfium from PDFIUM_LIB_PATH={}", p);
                Pdfium::bind_to_library(&p)
                    .map_err(|e| Pdf2TxtError::PdfiumBindingFailed(format!("{p}: {e:?}")))?
            }
            _ => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library())
                .map_err(|e| Pdf2TxtError::PdfiumBindingFailed(format!("{e:?}")))?,
        };
        info!("pdfium bound");
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl TextSource for PdfiumTextSource {
    fn open<'a>(
        &'a self,
        path: &Path,
        password: Option<&'a str>,
    ) -> Result<Box<dyn TextDocument + 'a>, Pdf2TxtError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, password)
            .map_err(|e| map_open_error(path, password.is_some(), format!("{e:?}")))?;
        Ok(Box::new(PdfiumDocument { document }))
    }
}

struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
}

impl TextDocument for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page_text(&self, index: usize) -> Result<String, String> {
        let page = self
            .document
            .pages()
            .get(index as PdfPageIndex)
            .map_err(|e| format!("{e:?}"))?;
        let text = page.text().map_err(|e| format!("{e:?}"))?;
        Ok(text.all())
    }
}

/// Classify a pdfium load failure by its debug rendering.
fn map_open_error(path: &Path, had_password: bool, detail: String) -> Pdf2TxtError {
    if detail.contains("Password") || detail.contains("password") {
        if had_password {
            Pdf2TxtError::WrongPassword {
                path: path.to_path_buf(),
            }
        } else {
            Pdf2TxtError::PasswordRequired {
                path: path.to_path_buf(),
            }
        }
    } else {
        Pdf2TxtError::CorruptPdf {
            path: path.to_path_buf(),
            detail,
        }
    }
}
