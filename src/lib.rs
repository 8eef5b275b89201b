// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Reflow
//!
//! Reconstructs human-readable text from the positioned fragments a PDF text
//! extractor produces, without access to the PDF's semantic structure.
//!
//! ## Core Features
//!
//! - **Fragment Normalization**: affine transform → origin, extent, font size
//! - **Line Grouping**: baseline clustering with font-relative tolerance
//! - **Column Detection**: greedy midpoint clustering with noise filtering
//! - **Paragraphs**: whitespace inference and vertical-gap paragraph breaks
//! - **Rendering**: annotated plain text (page/column markers) or JSON
//!
//! ## Architecture
//! - **Pure stages**: every stage is a function of the previous stage's output
//! - **Page independence**: pages share no state (`parallel` feature runs
//!   them on rayon)
//! - **Tunable heuristics**: every threshold lives in [`pipeline::LayoutConfig`]
//!
//! ## Quick Start
//!
//! ```
//! use pdf_reflow::layout::RawFragment;
//! use pdf_reflow::pipeline::LayoutPipeline;
//!
//! let page = vec![
//!     RawFragment::new("Jane", 72.0, 740.0, 30.0, 14.0),
//!     RawFragment::new("Doe", 110.0, 740.0, 24.0, 14.0),
//!     RawFragment::new("Software Engineer", 72.0, 724.0, 110.0, 11.0),
//! ];
//!
//! let text = LayoutPipeline::new().extract_text(&[page]);
//! // The 16pt drop to the title line exceeds the paragraph gap
//! assert_eq!(text, "--- Page 1 ---\nJane Doe\n\nSoftware Engineer");
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Input documents
pub mod document;

// Layout analysis
pub mod geometry;
pub mod layout;

// Pipeline and configuration
pub mod pipeline;

// Format converters
pub mod converters;

// Re-exports
pub use converters::{JsonConverter, OutputConverter, PlainTextConverter};
pub use document::FragmentDocument;
pub use error::{Error, Result};
pub use layout::{PageBlock, RawFragment};
pub use pipeline::{LayoutConfig, LayoutPipeline};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all other values.
    /// This ensures that sorting operations never panic due to NaN comparisons.
    #[inline]
    pub fn safe_float_cmp(a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater, // NaN > all numbers
            (false, true) => Ordering::Less,    // all numbers < NaN
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }

    /// Median of a set of values; the mean of the two middle values when the
    /// count is even. `None` for an empty set.
    pub fn median(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| safe_float_cmp(*a, *b));

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Some(sorted[mid])
        } else {
            Some((sorted[mid - 1] + sorted[mid]) / 2.0)
        }
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
