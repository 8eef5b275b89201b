//! Geometric primitives for layout analysis.
//!
//! Layout reconstruction only reasons about horizontal extents (for column
//! bands) and vertical positions (for baselines), so the primitive here is a
//! one-dimensional band on the x axis.

/// A horizontal band `[x_min, x_max]` in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalSpan {
    /// Left edge
    pub x_min: f64,
    /// Right edge
    pub x_max: f64,
}

impl HorizontalSpan {
    /// Create a new span from its two edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reflow::geometry::HorizontalSpan;
    ///
    /// let span = HorizontalSpan::new(10.0, 110.0);
    /// assert_eq!(span.mid(), 60.0);
    /// ```
    pub fn new(x_min: f64, x_max: f64) -> Self {
        Self { x_min, x_max }
    }

    /// Horizontal midpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reflow::geometry::HorizontalSpan;
    ///
    /// let span = HorizontalSpan::new(0.0, 50.0);
    /// assert_eq!(span.mid(), 25.0);
    /// ```
    pub fn mid(&self) -> f64 {
        (self.x_min + self.x_max) / 2.0
    }

    /// Smallest span covering both `self` and `other`.
    pub fn union(&self, other: &HorizontalSpan) -> HorizontalSpan {
        HorizontalSpan {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
        }
    }

    /// Distance from `x` to the band: zero inside, otherwise the gap to the
    /// nearest edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_reflow::geometry::HorizontalSpan;
    ///
    /// let band = HorizontalSpan::new(100.0, 200.0);
    /// assert_eq!(band.distance_to(150.0), 0.0);
    /// assert_eq!(band.distance_to(90.0), 10.0);
    /// assert_eq!(band.distance_to(230.0), 30.0);
    /// ```
    pub fn distance_to(&self, x: f64) -> f64 {
        if self.contains(x) {
            0.0
        } else if x < self.x_min {
            self.x_min - x
        } else {
            x - self.x_max
        }
    }

    /// Check if `x` lies within the band (edges inclusive).
    pub fn contains(&self, x: f64) -> bool {
        x >= self.x_min && x <= self.x_max
    }
}
