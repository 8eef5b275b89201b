//! Reconstructed page structure.

use serde::{Deserialize, Serialize};

/// The paragraphs of one column, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBlock {
    /// Zero-based column index, left-to-right
    pub column_index: usize,
    /// Paragraph texts; lines inside a paragraph are separated by `\n`
    pub paragraphs: Vec<String>,
}

impl ColumnBlock {
    /// Create a column block.
    pub fn new(column_index: usize, paragraphs: Vec<String>) -> Self {
        Self {
            column_index,
            paragraphs,
        }
    }
}

/// One reconstructed page.
///
/// A page with no columns had no text at all. A page with text but no
/// detected column structure carries a single implicit column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBlock {
    /// One-based page number
    pub page: usize,
    /// Columns in index order
    pub columns: Vec<ColumnBlock>,
}

impl PageBlock {
    /// A page without any text.
    pub fn empty(page: usize) -> Self {
        Self {
            page,
            columns: Vec::new(),
        }
    }

    /// True when the page had no text.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Total number of paragraphs across all columns.
    pub fn paragraph_count(&self) -> usize {
        self.columns.iter().map(|c| c.paragraphs.len()).sum()
    }
}
