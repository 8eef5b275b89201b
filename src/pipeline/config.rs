//! Unified configuration for the layout reconstruction pipeline.
//!
//! Every heuristic threshold used by the stages lives here instead of being
//! hard-coded, grouped by the stage that consumes it:
//! - LineGroupingConfig
//! - ColumnDetectionConfig
//! - ParagraphConfig
//! - SpacingConfig
//!
//! The defaults are the empirically tuned values the stages were built
//! around. Changing them changes output; keep the defaults when output must
//! stay byte-compatible with existing consumers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Baseline clustering parameters for the line grouper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineGroupingConfig {
    /// Baseline tolerance as a fraction of the median font size (default: 0.45)
    pub baseline_tolerance_factor: f64,

    /// Lower bound on the baseline tolerance, in points (default: 1.0)
    pub min_baseline_tolerance: f64,

    /// Font size used when a fragment carries none and for empty pages (default: 10.0)
    pub default_font_size: f64,
}

impl Default for LineGroupingConfig {
    fn default() -> Self {
        Self {
            baseline_tolerance_factor: 0.45,
            min_baseline_tolerance: 1.0,
            default_font_size: 10.0,
        }
    }
}

/// Column band detection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnDetectionConfig {
    /// Run column detection at all; when false every page is one column
    pub enabled: bool,

    /// Pages with fewer lines than this never report columns (default: 2)
    pub min_lines: usize,

    /// Midpoint clustering tolerance as a fraction of the text extent (default: 0.06)
    pub tolerance_factor: f64,

    /// Absolute floor on lines per surviving cluster (default: 3)
    pub min_column_lines: usize,

    /// Lines per surviving cluster as a fraction of the page's lines (default: 0.08)
    pub min_column_line_ratio: f64,
}

impl Default for ColumnDetectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_lines: 2,
            tolerance_factor: 0.06,
            min_column_lines: 3,
            min_column_line_ratio: 0.08,
        }
    }
}

/// Paragraph break parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphConfig {
    /// Break threshold as a fraction of the median line height (default: 0.85)
    pub gap_factor: f64,

    /// Lower bound on the break threshold, in points (default: 2.0)
    pub min_gap: f64,

    /// Line height used when no median is available (default: 12.0)
    pub default_line_height: f64,
}

impl Default for ParagraphConfig {
    fn default() -> Self {
        Self {
            gap_factor: 0.85,
            min_gap: 2.0,
            default_line_height: 12.0,
        }
    }
}

/// Intra-line whitespace inference parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingConfig {
    /// Gap, as a fraction of the average character width, above which a
    /// space is inserted between fragments (default: 0.55)
    pub word_gap_factor: f64,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            word_gap_factor: 0.55,
        }
    }
}

/// Complete configuration for [`LayoutPipeline`](crate::pipeline::LayoutPipeline).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Line grouping
    pub lines: LineGroupingConfig,
    /// Column detection
    pub columns: ColumnDetectionConfig,
    /// Paragraph grouping
    pub paragraphs: ParagraphConfig,
    /// Whitespace inference
    pub spacing: SpacingConfig,
}

impl LayoutConfig {
    /// Create a configuration with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the baseline tolerance factor.
    pub fn with_baseline_tolerance_factor(mut self, factor: f64) -> Self {
        self.lines.baseline_tolerance_factor = factor;
        self
    }

    /// Enable or disable column detection.
    pub fn with_column_detection(mut self, enable: bool) -> Self {
        self.columns.enabled = enable;
        self
    }

    /// Set the column clustering tolerance factor.
    pub fn with_column_tolerance_factor(mut self, factor: f64) -> Self {
        self.columns.tolerance_factor = factor;
        self
    }

    /// Set the minimum membership floor for a column.
    pub fn with_min_column_lines(mut self, lines: usize) -> Self {
        self.columns.min_column_lines = lines;
        self
    }

    /// Set the paragraph gap factor.
    pub fn with_paragraph_gap_factor(mut self, factor: f64) -> Self {
        self.paragraphs.gap_factor = factor;
        self
    }

    /// Set the word gap factor.
    pub fn with_word_gap_factor(mut self, factor: f64) -> Self {
        self.spacing.word_gap_factor = factor;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reflow::pipeline::LayoutConfig;
    ///
    /// let config = LayoutConfig::from_json_str(r#"{"spacing": {"word_gap_factor": 0.3}}"#).unwrap();
    /// assert_eq!(config.spacing.word_gap_factor, 0.3);
    /// assert_eq!(config.paragraphs.gap_factor, 0.85);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject thresholds that would make the stages meaningless.
    pub fn validate(&self) -> Result<()> {
        let factors = [
            ("lines.baseline_tolerance_factor", self.lines.baseline_tolerance_factor),
            ("lines.min_baseline_tolerance", self.lines.min_baseline_tolerance),
            ("lines.default_font_size", self.lines.default_font_size),
            ("columns.tolerance_factor", self.columns.tolerance_factor),
            ("columns.min_column_line_ratio", self.columns.min_column_line_ratio),
            ("paragraphs.gap_factor", self.paragraphs.gap_factor),
            ("paragraphs.min_gap", self.paragraphs.min_gap),
            ("paragraphs.default_line_height", self.paragraphs.default_line_height),
            ("spacing.word_gap_factor", self.spacing.word_gap_factor),
        ];

        for (name, value) in factors {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.lines.default_font_size == 0.0 {
            return Err(Error::InvalidConfig(
                "lines.default_font_size must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
