//! Join per-page results into the final text.

use crate::config::PageSeparator;
use crate::output::PageResult;

/// Join every page, placeholders included, with `separator`.
///
/// Zero pages yield an empty string.
pub fn assemble_text(pages: &[PageResult], separator: &PageSeparator) -> String {
    pages
        .iter()
        .map(PageResult::rendered)
        .collect::<Vec<_>>()
        .join(separator.as_str())
}
