//! Pipeline stages for PDF-to-text extraction.
//!
//! ```text
//! input ──▶ source ──▶ assemble ──▶ (write)
//! (path)    (pdfium)   (join)
//! ```
//!
//! 1. [`input`]    — check the input path exists and is readable
//! 2. [`source`]   — open the document and extract text page by page
//! 3. [`assemble`] — join page texts and placeholders with the separator
//!
//! Writing the result lives in [`crate::extract`].

pub mod assemble;
pub mod input;
pub mod source;
