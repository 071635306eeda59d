//! Input resolution: check a user-supplied path before handing it to pdfium.
//!
//! pdfium reports a missing or unreadable file as a generic load failure.
//! Probing the file first gives callers a precise error instead. No content
//! sniffing happens here; deciding whether the bytes are a PDF is left to
//! pdfium.

use crate::error::Pdf2TxtError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validate that `path` names a readable regular file.
pub fn resolve_local(path: &Path) -> Result<PathBuf, Pdf2TxtError> {
    if !path.is_file() {
        return Err(Pdf2TxtError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    match std::fs::File::open(path) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(Pdf2TxtError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(Pdf2TxtError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    debug!("Resolved local PDF: {}", path.display());
    Ok(path.to_path_buf())
}
