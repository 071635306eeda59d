//! Single-document extraction entry points.
//!
//! [`extract_text`] runs the pipeline and returns the result in memory;
//! [`extract`] additionally writes it to an output file. Page failures never
//! abort a document: they become placeholders. Only a document that cannot
//! be opened (or an output that cannot be written) is an error.

use crate::config::ExtractionConfig;
use crate::error::{PageError, Pdf2TxtError};
use crate::output::{ExtractionOutput, ExtractionStats, PageResult};
use crate::pipeline::source::TextSource;
use crate::pipeline::{assemble, input};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Extract the text of every selected page of `input`.
///
/// # Errors
/// Returns `Err(Pdf2TxtError)` only when the document itself cannot be
/// opened: file not found, permission denied, unreadable PDF, password
/// required or wrong.
pub fn extract_text<S>(
    source: &S,
    input: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, Pdf2TxtError>
where
    S: TextSource + ?Sized,
{
    let start = Instant::now();
    let input = input.as_ref();
    info!("Extracting text: {}", input.display());

    let pdf_path = input::resolve_local(input)?;
    let document = source.open(&pdf_path, config.password.as_deref())?;

    let total_pages = document.page_count();
    let indices = config.pages.to_indices(total_pages);
    let skipped_pages = config.pages.out_of_range(total_pages);
    if skipped_pages > 0 {
        warn!(
            "{}: {} selected page(s) out of range (document has {} pages)",
            input.display(),
            skipped_pages,
            total_pages
        );
    }
    debug!("{} has {} pages, {} selected", input.display(), total_pages, indices.len());

    let cb = config.progress_callback.as_ref();
    if let Some(cb) = cb {
        cb.on_document_start(input, indices.len());
    }

    let selected = indices.len();
    let mut pages = Vec::with_capacity(selected);
    for idx in indices {
        let page_num = idx + 1;
        match document.page_text(idx) {
            Ok(text) => {
                debug!("Page {} → {} bytes", page_num, text.len());
                if let Some(cb) = cb {
                    cb.on_page_complete(page_num, selected, text.len());
                }
                pages.push(PageResult {
                    page_num,
                    text,
                    error: None,
                });
            }
            Err(detail) => {
                let error = PageError::ExtractionFailed {
                    page: page_num,
                    detail,
                };
                warn!("{}: {}", input.display(), error);
                if let Some(cb) = cb {
                    cb.on_page_error(page_num, selected, &error.to_string());
                }
                pages.push(PageResult {
                    page_num,
                    text: String::new(),
                    error: Some(error),
                });
            }
        }
    }

    let text = assemble::assemble_text(&pages, &config.page_separator);
    let failed_pages = pages.iter().filter(|p| p.error.is_some()).count();
    let stats = ExtractionStats {
        total_pages,
        extracted_pages: pages.len() - failed_pages,
        failed_pages,
        skipped_pages,
        total_chars: text.len(),
        duration_ms: start.elapsed().as_millis() as u64,
    };

    if let Some(cb) = cb {
        cb.on_document_complete(input, stats.extracted_pages, selected);
    }
    info!(
        "Extracted {}/{} pages from {} in {}ms",
        stats.extracted_pages,
        selected,
        input.display(),
        stats.duration_ms
    );

    Ok(ExtractionOutput { text, pages, stats })
}

/// Extract the text of `input` and write it to `output`.
///
/// The output is written as UTF-8, replacing any existing file. Nothing is
/// written when the document fails to open.
pub fn extract<S>(
    source: &S,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ExtractionStats, Pdf2TxtError>
where
    S: TextSource + ?Sized,
{
    let extracted = extract_text(source, input, config)?;
    write_output(output.as_ref(), &extracted.text, config.create_parent_dirs)?;
    Ok(extracted.stats)
}

/// Write `text` to `path` via a sibling temp file and a rename, so a failed
/// write never leaves a truncated output or a stray temp file behind.
fn write_output(path: &Path, text: &str, create_parent_dirs: bool) -> Result<(), Pdf2TxtError> {
    let fail = |source: std::io::Error| Pdf2TxtError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let file_name = path.file_name().ok_or_else(|| {
        fail(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "output path has no file name",
        ))
    })?;

    if create_parent_dirs {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(fail)?;
        }
    }

    // Hidden and process-specific, so it cannot collide with a user file
    // named `<output>.tmp`.
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    let tmp_path = path.with_file_name(tmp_name);

    if let Err(e) =
        std::fs::write(&tmp_path, text).and_then(|()| std::fs::rename(&tmp_path, path))
    {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(fail(e));
    }

    debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
