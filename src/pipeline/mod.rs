//! Layout reconstruction pipeline.
//!
//! ```text
//! RawFragment[] (one page, from an external PDF text extractor)
//!     ↓
//! [normalize_fragments] (transform → position, extent, font size)
//!     ↓
//! [group_lines] (baseline clustering)
//!     ↓
//! [detect_columns] + [assign_lines_to_columns] (midpoint band clustering)
//!     ↓
//! [group_paragraphs] (whitespace inference, vertical gap breaks)
//!     ↓
//! PageBlock
//!     ↓
//! [OutputConverter] (plain text / JSON)
//! ```
//!
//! Pages share no state, so they can be processed in any order or in
//! parallel (enable the `parallel` feature); results always come back in
//! page order.
//!
//! [normalize_fragments]: crate::layout::normalize_fragments
//! [group_lines]: crate::layout::group_lines
//! [detect_columns]: crate::layout::detect_columns
//! [assign_lines_to_columns]: crate::layout::assign_lines_to_columns
//! [group_paragraphs]: crate::layout::group_paragraphs
//! [OutputConverter]: crate::converters::OutputConverter

pub mod config;

// Re-export main types
pub use config::{
    ColumnDetectionConfig, LayoutConfig, LineGroupingConfig, ParagraphConfig, SpacingConfig,
};

use crate::converters::render_pages;
use crate::document::FragmentDocument;
use crate::layout::{
    assign_lines_to_columns, detect_columns, group_lines, group_paragraphs, normalize_fragments,
    ColumnBlock, PageBlock, RawFragment,
};

/// Counts gathered while reconstructing a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageStats {
    /// Non-blank fragments
    pub fragments: usize,
    /// Lines after baseline clustering
    pub lines: usize,
    /// Detected column bands (zero means single implicit column)
    pub columns: usize,
    /// Paragraphs across all columns
    pub paragraphs: usize,
}

/// The layout reconstruction pipeline - orchestrates the per-page stages.
#[derive(Debug, Clone, Default)]
pub struct LayoutPipeline {
    config: LayoutConfig,
}

impl LayoutPipeline {
    /// Create a new pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Reconstruct one page.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reflow::layout::RawFragment;
    /// use pdf_reflow::pipeline::LayoutPipeline;
    ///
    /// let page = LayoutPipeline::new().process_page(1, &[
    ///     RawFragment::new("Hello", 72.0, 700.0, 40.0, 12.0),
    ///     RawFragment::new("World", 142.0, 700.0, 40.0, 12.0),
    /// ]);
    /// assert_eq!(page.columns[0].paragraphs, vec!["Hello World".to_string()]);
    /// ```
    pub fn process_page(&self, page_number: usize, fragments: &[RawFragment]) -> PageBlock {
        self.analyze_page(page_number, fragments).0
    }

    /// Reconstruct one page and report what each stage produced.
    pub fn analyze_page(
        &self,
        page_number: usize,
        fragments: &[RawFragment],
    ) -> (PageBlock, PageStats) {
        let config = &self.config;
        let items = normalize_fragments(fragments, config.lines.default_font_size);

        let mut stats = PageStats {
            fragments: items.len(),
            ..PageStats::default()
        };

        if items.is_empty() {
            log::debug!("Page {}: no text fragments", page_number);
            return (PageBlock::empty(page_number), stats);
        }

        let lines = group_lines(items, &config.lines);
        stats.lines = lines.len();

        let columns = if config.columns.enabled {
            detect_columns(&lines, &config.columns)
        } else {
            Vec::new()
        };
        stats.columns = columns.len();

        let word_gap = config.spacing.word_gap_factor;
        let blocks: Vec<ColumnBlock> = if columns.is_empty() {
            // No distinct column structure: one implicit column in page order
            vec![ColumnBlock::new(0, group_paragraphs(&lines, &config.paragraphs, word_gap))]
        } else {
            assign_lines_to_columns(lines, &columns)
                .into_iter()
                .enumerate()
                .map(|(index, col_lines)| {
                    let paragraphs = group_paragraphs(&col_lines, &config.paragraphs, word_gap);
                    ColumnBlock::new(index, paragraphs)
                })
                .collect()
        };

        let page = PageBlock {
            page: page_number,
            columns: blocks,
        };
        stats.paragraphs = page.paragraph_count();

        log::debug!(
            "Page {}: fragments={}, lines={}, columns={}, paragraphs={}",
            page_number,
            stats.fragments,
            stats.lines,
            stats.columns,
            stats.paragraphs
        );

        (page, stats)
    }

    /// Reconstruct every page; page numbers are one-based positions.
    #[cfg(not(feature = "parallel"))]
    pub fn process_pages<P: AsRef<[RawFragment]> + Sync>(&self, pages: &[P]) -> Vec<PageBlock> {
        pages
            .iter()
            .enumerate()
            .map(|(idx, fragments)| self.process_page(idx + 1, fragments.as_ref()))
            .collect()
    }

    /// Reconstruct every page on the rayon pool; page numbers are one-based
    /// positions and the output keeps page order.
    #[cfg(feature = "parallel")]
    pub fn process_pages<P: AsRef<[RawFragment]> + Sync>(&self, pages: &[P]) -> Vec<PageBlock> {
        use rayon::prelude::*;

        pages
            .par_iter()
            .enumerate()
            .map(|(idx, fragments)| self.process_page(idx + 1, fragments.as_ref()))
            .collect()
    }

    /// Reconstruct every page and render to annotated plain text.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reflow::layout::RawFragment;
    /// use pdf_reflow::pipeline::LayoutPipeline;
    ///
    /// let pages: Vec<Vec<RawFragment>> = vec![
    ///     vec![RawFragment::new("Jane Doe", 72.0, 740.0, 60.0, 14.0)],
    ///     vec![],
    /// ];
    /// let text = LayoutPipeline::new().extract_text(&pages);
    /// assert_eq!(text, "--- Page 1 ---\nJane Doe\n\n--- Page 2 ---\n");
    /// ```
    pub fn extract_text<P: AsRef<[RawFragment]> + Sync>(&self, pages: &[P]) -> String {
        render_pages(&self.process_pages(pages))
    }

    /// Reconstruct a loaded fragment document.
    pub fn process_document(&self, document: &FragmentDocument) -> Vec<PageBlock> {
        self.process_pages(&document.page_items())
    }

    /// Reconstruct a loaded fragment document and render to plain text.
    pub fn extract_document(&self, document: &FragmentDocument) -> String {
        render_pages(&self.process_document(document))
    }
}
