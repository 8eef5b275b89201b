//! Layout reconstruction stages for positioned PDF text.
//!
//! Each stage is a pure function over the previous stage's output:
//! - Fragment normalization (transform → position, extent, font size)
//! - Baseline clustering of fragments into lines
//! - Column band detection and line-to-column assignment
//! - Whitespace inference and paragraph grouping

pub mod column_detector;
pub mod fragment;
pub mod line_grouper;
pub mod page;
pub mod paragraph;

// Re-export main types
pub use column_detector::{assign_lines_to_columns, detect_columns, Column};
pub use fragment::{normalize_fragments, PositionedItem, RawFragment, TextDirection};
pub use line_grouper::{group_lines, Line};
pub use page::{ColumnBlock, PageBlock};
pub use paragraph::{group_paragraphs, join_line};
