//! Column band detection.
//!
//! Lines are clustered greedily by the midpoint of their horizontal extent.
//! Each cluster keeps a running mean midpoint, a membership count and the
//! envelope of its members' extents. Clusters with too few lines are
//! dropped as noise (a stray indented line must not become a column), and
//! the survivors, ordered left-to-right, are the page's columns.
//!
//! This one-pass clustering is order-dependent. Lines must arrive in the
//! top-to-bottom order produced by the line grouper for the result to be
//! stable.

use crate::geometry::HorizontalSpan;
use crate::layout::line_grouper::Line;
use crate::pipeline::config::ColumnDetectionConfig;
use crate::utils::safe_float_cmp;

/// A detected column: a horizontal band of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    /// Left edge of the band
    pub x_min: f64,
    /// Right edge of the band
    pub x_max: f64,
}

impl Column {
    /// The band as a span.
    pub fn span(&self) -> HorizontalSpan {
        HorizontalSpan::new(self.x_min, self.x_max)
    }

    /// Distance from `x` to the band (zero inside).
    pub fn distance_to(&self, x: f64) -> f64 {
        self.span().distance_to(x)
    }
}

/// A cluster of lines under construction.
#[derive(Debug, Clone, Copy)]
struct BandCluster {
    /// Running mean of member midpoints
    mid: f64,
    /// Envelope of member extents
    extent: HorizontalSpan,
    /// Number of member lines
    count: usize,
}

impl BandCluster {
    fn new(span: HorizontalSpan) -> Self {
        Self {
            mid: span.mid(),
            extent: span,
            count: 1,
        }
    }

    fn absorb(&mut self, span: HorizontalSpan) {
        let n = self.count as f64;
        self.mid = (self.mid * n + span.mid()) / (n + 1.0);
        self.extent = self.extent.union(&span);
        self.count += 1;
    }
}

/// Minimum number of member lines for a cluster to count as a column:
/// `max(min_column_lines, floor(total_lines * min_column_line_ratio))`.
///
/// # Examples
///
/// ```
/// use pdf_reflow::layout::column_detector::min_lines_per_column;
/// use pdf_reflow::pipeline::ColumnDetectionConfig;
///
/// let config = ColumnDetectionConfig::default();
/// assert_eq!(min_lines_per_column(10, &config), 3);
/// assert_eq!(min_lines_per_column(100, &config), 8);
/// ```
pub fn min_lines_per_column(total_lines: usize, config: &ColumnDetectionConfig) -> usize {
    let proportional = (total_lines as f64 * config.min_column_line_ratio).floor() as usize;
    config.min_column_lines.max(proportional)
}

/// Detect column bands among a page's lines.
///
/// Returns an empty list when the page has too few lines or when no cluster
/// gathers enough members; callers then treat the page as one column.
pub fn detect_columns(lines: &[Line], config: &ColumnDetectionConfig) -> Vec<Column> {
    if lines.len() < config.min_lines.max(1) {
        return Vec::new();
    }

    let spans: Vec<HorizontalSpan> = lines.iter().map(Line::span).collect();

    let left = spans.iter().map(|s| s.x_min).fold(f64::INFINITY, f64::min);
    let right = spans.iter().map(|s| s.x_max).fold(f64::NEG_INFINITY, f64::max);
    let extent = right - left;
    let width_proxy = if extent == 0.0 || extent.is_nan() { 1.0 } else { extent };
    let tol = width_proxy * config.tolerance_factor;

    let mut clusters: Vec<BandCluster> = Vec::new();
    for span in spans {
        match clusters
            .iter_mut()
            .find(|c| (c.mid - span.mid()).abs() <= tol)
        {
            Some(cluster) => cluster.absorb(span),
            None => clusters.push(BandCluster::new(span)),
        }
    }

    let min_members = min_lines_per_column(lines.len(), config);

    for c in &clusters {
        log::trace!(
            "Band cluster mid={:.1} [{:.1}, {:.1}] count={} {}",
            c.mid,
            c.extent.x_min,
            c.extent.x_max,
            c.count,
            if c.count >= min_members { "kept" } else { "dropped" }
        );
    }

    let mut columns: Vec<Column> = clusters
        .into_iter()
        .filter(|c| c.count >= min_members)
        .map(|c| Column {
            x_min: c.extent.x_min,
            x_max: c.extent.x_max,
        })
        .collect();
    columns.sort_by(|a, b| safe_float_cmp(a.x_min, b.x_min));

    log::debug!(
        "Column detection: lines={}, tol={:.2}, min_members={}, columns={}",
        lines.len(),
        tol,
        min_members,
        columns.len()
    );

    columns
}

/// Assign each line to the column band nearest its midpoint.
///
/// The result has one entry per column, in column order. Ties go to the
/// earliest column. Within each column lines are re-sorted top-to-bottom
/// (descending anchor), then left-to-right, since the page order
/// interleaves columns.
pub fn assign_lines_to_columns(lines: Vec<Line>, columns: &[Column]) -> Vec<Vec<Line>> {
    if columns.is_empty() {
        return Vec::new();
    }

    let mut assigned: Vec<Vec<Line>> = vec![Vec::new(); columns.len()];

    for line in lines {
        let mid = line.mid_x();
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, col) in columns.iter().enumerate() {
            let dist = col.distance_to(mid);
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        assigned[best].push(line);
    }

    for col_lines in &mut assigned {
        col_lines.sort_by(|a, b| {
            safe_float_cmp(b.anchor_y, a.anchor_y)
                .then_with(|| safe_float_cmp(a.x_min(), b.x_min()))
        });
    }

    assigned
}
