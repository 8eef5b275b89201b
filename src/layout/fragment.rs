//! Positioned text fragments and their normalization.
//!
//! A PDF text extractor hands out runs of glyphs, each with a 2D affine
//! transform `[a, b, c, d, e, f]` and an advance width. Layout analysis only
//! needs the origin, the extent and an estimate of the font size, so every
//! raw fragment is normalized into a [`PositionedItem`] first.

use serde::{Deserialize, Serialize};

/// Writing direction reported by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left-to-right
    #[default]
    Ltr,
    /// Right-to-left
    Rtl,
}

/// A text fragment as produced by an external PDF text extractor.
///
/// Field aliases accept pdf.js `getTextContent()` output directly
/// (`str`, `dir`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFragment {
    /// The fragment's text
    #[serde(alias = "str")]
    pub text: String,
    /// Text-space to page-space affine transform `[a, b, c, d, e, f]`
    pub transform: [f64; 6],
    /// Advance width in page units
    pub width: f64,
    /// Glyph height, when the extractor reports one
    #[serde(default)]
    pub height: Option<f64>,
    /// Writing direction, when the extractor reports one
    #[serde(default, alias = "dir")]
    pub direction: Option<TextDirection>,
}

impl RawFragment {
    /// Create a fragment at `(x, y)` with an upright transform of the given
    /// font size.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reflow::layout::RawFragment;
    ///
    /// let frag = RawFragment::new("Hello", 72.0, 700.0, 40.0, 12.0);
    /// assert_eq!(frag.transform, [12.0, 0.0, 0.0, 12.0, 72.0, 700.0]);
    /// ```
    pub fn new(text: impl Into<String>, x: f64, y: f64, width: f64, font_size: f64) -> Self {
        Self {
            text: text.into(),
            transform: [font_size, 0.0, 0.0, font_size, x, y],
            width,
            height: None,
            direction: None,
        }
    }

    /// Set the reported height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the reported direction.
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// True when the text is empty or holds only whitespace and byte-order
    /// marks.
    pub fn is_blank(&self) -> bool {
        self.text
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
            .is_empty()
    }
}

/// A fragment reduced to the geometry layout analysis works with.
///
/// `y` grows upward (PDF convention), so a larger `y` is higher on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedItem {
    /// The fragment's text
    pub text: String,
    /// Origin x (transform `e`)
    pub x: f64,
    /// Origin y (transform `f`)
    pub y: f64,
    /// Advance width
    pub width: f64,
    /// Height used for paragraph spacing
    pub height: f64,
    /// Writing direction
    pub direction: TextDirection,
    /// Estimated font size
    pub font_size: f64,
}

impl PositionedItem {
    /// Normalize a raw fragment.
    ///
    /// The font size is the vertical scale of the transform, `hypot(b, d)`.
    /// A zero or NaN scale (identity-like or degenerate transforms) falls back
    /// to the reported height, then to `default_font_size`. The height falls
    /// back to the font size when the extractor reports none.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reflow::layout::{PositionedItem, RawFragment};
    ///
    /// let mut frag = RawFragment::new("x", 0.0, 0.0, 5.0, 12.0);
    /// frag.transform = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    /// let item = PositionedItem::from_raw(&frag, 10.0);
    /// assert_eq!(item.font_size, 10.0);
    /// ```
    pub fn from_raw(fragment: &RawFragment, default_font_size: f64) -> Self {
        let [_, b, _, d, e, f] = fragment.transform;

        let font_size = match non_zero(b.hypot(d)).or_else(|| fragment.height.and_then(non_zero)) {
            Some(size) => size,
            None => {
                log::debug!(
                    "Degenerate transform for fragment {:?}, using default font size {}",
                    fragment.text,
                    default_font_size
                );
                default_font_size
            },
        };

        Self {
            text: fragment.text.clone(),
            x: e,
            y: f,
            width: fragment.width,
            height: fragment.height.unwrap_or(font_size),
            direction: fragment.direction.unwrap_or_default(),
            font_size,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Length of the text in UTF-16 code units, the unit extractor widths
    /// are averaged over. Astral-plane characters count twice.
    pub fn char_count(&self) -> usize {
        self.text.encode_utf16().count()
    }
}

fn non_zero(value: f64) -> Option<f64> {
    if value == 0.0 || value.is_nan() {
        None
    } else {
        Some(value)
    }
}

/// Drop blank fragments and normalize the rest, preserving input order.
pub fn normalize_fragments(
    fragments: &[RawFragment],
    default_font_size: f64,
) -> Vec<PositionedItem> {
    fragments
        .iter()
        .filter(|f| !f.is_blank())
        .map(|f| PositionedItem::from_raw(f, default_font_size))
        .collect()
}
