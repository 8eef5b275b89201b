//! Baseline clustering of positioned items into text lines.
//!
//! Items are visited top-to-bottom, left-to-right and each joins the first
//! existing line whose anchor baseline is within tolerance. The tolerance
//! scales with the page's median font size so lines of similar size merge
//! while superscripts and tightly set neighbouring lines stay apart.
//!
//! The clustering is order-dependent; the sort keys (descending `y`, then
//! ascending `x`) must not change or output drifts.

use crate::geometry::HorizontalSpan;
use crate::layout::fragment::PositionedItem;
use crate::layout::paragraph::join_line;
use crate::pipeline::config::LineGroupingConfig;
use crate::utils::{median, safe_float_cmp};

/// A text line: items sharing a baseline, ordered left-to-right.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Members sorted by ascending `x`
    pub items: Vec<PositionedItem>,
    /// `y` of the first item placed in the line (the clustering anchor)
    pub anchor_y: f64,
}

impl Line {
    fn start(item: PositionedItem) -> Self {
        Self {
            anchor_y: item.y,
            items: vec![item],
        }
    }

    /// Number of items in the line.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the line has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Leftmost item origin.
    pub fn x_min(&self) -> f64 {
        self.items.iter().map(|i| i.x).fold(f64::INFINITY, f64::min)
    }

    /// Rightmost item edge.
    pub fn x_max(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.right())
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Horizontal extent of the line.
    pub fn span(&self) -> HorizontalSpan {
        HorizontalSpan::new(self.x_min(), self.x_max())
    }

    /// Horizontal midpoint of the line's extent.
    pub fn mid_x(&self) -> f64 {
        self.span().mid()
    }

    /// Baseline of the leftmost item; paragraph gaps are measured on it.
    pub fn baseline(&self) -> f64 {
        self.items.first().map_or(self.anchor_y, |i| i.y)
    }

    /// Tallest item height in the line.
    pub fn height(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.height)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Joined text of the line with inferred word spaces.
    pub fn text(&self, word_gap_factor: f64) -> String {
        join_line(&self.items, word_gap_factor)
    }
}

/// Sort items top-to-bottom (descending `y`), then left-to-right.
pub fn sort_reading_order(items: &mut [PositionedItem]) {
    items.sort_by(|p, q| safe_float_cmp(q.y, p.y).then_with(|| safe_float_cmp(p.x, q.x)));
}

/// Baseline tolerance for a set of items: `max(min, median_font * factor)`.
///
/// # Examples
///
/// ```
/// use pdf_reflow::layout::{line_grouper::baseline_tolerance, PositionedItem, RawFragment};
/// use pdf_reflow::pipeline::LineGroupingConfig;
///
/// let items: Vec<PositionedItem> = [10.0, 12.0, 20.0]
///     .iter()
///     .map(|&size| PositionedItem::from_raw(&RawFragment::new("a", 0.0, 0.0, 5.0, size), 10.0))
///     .collect();
/// let eps = baseline_tolerance(&items, &LineGroupingConfig::default());
/// assert!((eps - 5.4).abs() < 1e-4);
/// ```
pub fn baseline_tolerance(items: &[PositionedItem], config: &LineGroupingConfig) -> f64 {
    let sizes: Vec<f64> = items.iter().map(|i| i.font_size).collect();
    let median_font = median(&sizes)
        .filter(|m| *m != 0.0 && !m.is_nan())
        .unwrap_or(config.default_font_size);
    config
        .min_baseline_tolerance
        .max(median_font * config.baseline_tolerance_factor)
}

/// Group items into lines.
///
/// Every item ends up in exactly one line. Lines are returned in creation
/// order, which is top-to-bottom by anchor; members are sorted by `x`.
pub fn group_lines(mut items: Vec<PositionedItem>, config: &LineGroupingConfig) -> Vec<Line> {
    if items.is_empty() {
        return Vec::new();
    }

    sort_reading_order(&mut items);
    let y_eps = baseline_tolerance(&items, config);

    let mut lines: Vec<Line> = Vec::new();
    for item in items {
        match lines
            .iter_mut()
            .find(|line| (line.anchor_y - item.y).abs() <= y_eps)
        {
            Some(line) => line.items.push(item),
            None => lines.push(Line::start(item)),
        }
    }

    for line in &mut lines {
        line.items.sort_by(|a, b| safe_float_cmp(a.x, b.x));
    }

    log::trace!("Grouped lines: y_eps={:.2}, lines={}", y_eps, lines.len());

    lines
}
