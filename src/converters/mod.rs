//! Output converters for reconstructed pages.
//!
//! - **Plain text**: flat annotated text with page and column markers, meant
//!   for natural-language consumers (LLM prompts, text analysis)
//! - **JSON**: the page/column/paragraph structure for machine consumers
//!
//! # Examples
//!
//! ```
//! use pdf_reflow::converters::{OutputConverter, PlainTextConverter};
//! use pdf_reflow::layout::{ColumnBlock, PageBlock};
//!
//! let pages = vec![PageBlock {
//!     page: 1,
//!     columns: vec![ColumnBlock::new(0, vec!["Jane Doe\nEngineer".to_string()])],
//! }];
//! let text = PlainTextConverter::new().convert(&pages).unwrap();
//! assert_eq!(text, "--- Page 1 ---\nJane Doe\nEngineer");
//! ```

pub mod json;
pub mod plain_text;

// Re-export main types
pub use json::JsonConverter;
pub use plain_text::{render_pages, PlainTextConverter};

use crate::error::Result;
use crate::layout::PageBlock;

/// Trait for rendering reconstructed pages into an output format.
pub trait OutputConverter: Send + Sync {
    /// Render pages, in the order given, into a single output string.
    fn convert(&self, pages: &[PageBlock]) -> Result<String>;

    /// Return the name of this converter for debugging.
    fn name(&self) -> &'static str;
}
