//! Plain-text rendering with page and column markers.
//!
//! ```text
//! --- Page 1 ---
//! -- Column 1 --
//! First paragraph line one
//! line two
//!
//! Second paragraph
//!
//! -- Column 2 --
//! ...
//! ```
//!
//! Column markers appear only on pages with more than one column. A page
//! without text renders as its header followed by a newline. Pages are
//! separated by a blank line.

use crate::converters::OutputConverter;
use crate::error::Result;
use crate::layout::{ColumnBlock, PageBlock};

/// Renders pages as flat annotated text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextConverter;

impl PlainTextConverter {
    /// Create a new plain-text converter.
    pub fn new() -> Self {
        Self
    }
}

impl OutputConverter for PlainTextConverter {
    fn convert(&self, pages: &[PageBlock]) -> Result<String> {
        Ok(render_pages(pages))
    }

    fn name(&self) -> &'static str {
        "plain_text"
    }
}

/// Render pages to the annotated plain-text format.
///
/// # Examples
///
/// ```
/// use pdf_reflow::converters::render_pages;
/// use pdf_reflow::layout::PageBlock;
///
/// assert_eq!(render_pages(&[PageBlock::empty(3)]), "--- Page 3 ---\n");
/// ```
pub fn render_pages(pages: &[PageBlock]) -> String {
    pages
        .iter()
        .map(render_page)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_page(block: &PageBlock) -> String {
    let header = format!("--- Page {} ---", block.page);
    if block.columns.is_empty() {
        return format!("{}\n", header);
    }

    let mut columns: Vec<&ColumnBlock> = block.columns.iter().collect();
    columns.sort_by_key(|c| c.column_index);
    let multi = columns.len() > 1;

    let body = columns
        .into_iter()
        .map(|col| render_column(col, multi))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{}\n{}", header, body)
}

fn render_column(col: &ColumnBlock, with_header: bool) -> String {
    let col_header = if with_header {
        format!("-- Column {} --", col.column_index + 1)
    } else {
        String::new()
    };
    let paras = col.paragraphs.join("\n\n");

    [col_header, paras]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
