//! Axis-aligned bounding boxes and their overlap measures.
//!
//! Coordinates are inclusive pixel bounds: a box spanning `x1..=x2` covers
//! `x2 - x1 + 1` columns. Widths and heights that would come out negative
//! (`x2 < x1 - 1`) are clamped to zero, so a degenerate box has zero area
//! and zero overlap with everything.
//!
//! Coordinates are stored as `f32`; extents, areas and IoU are evaluated in
//! `f64` so pixel areas stay exact well beyond 2^24.

/// Axis-aligned box with inclusive corner coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    /// Left edge.
    pub x1: f32,
    /// Top edge.
    pub y1: f32,
    /// Right edge (inclusive).
    pub x2: f32,
    /// Bottom edge (inclusive).
    pub y2: f32,
}

impl BoundingBox {
    /// Creates a box from its corners. Ordering is not checked.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns `true` when `x2 < x1` or `y2 < y1`.
    pub fn is_degenerate(&self) -> bool {
        self.x2 < self.x1 || self.y2 < self.y1
    }

    /// Returns `true` when any coordinate is NaN.
    pub fn has_nan(&self) -> bool {
        self.x1.is_nan() || self.y1.is_nan() || self.x2.is_nan() || self.y2.is_nan()
    }

    /// Inclusive width, clamped to zero.
    #[inline]
    pub fn width(&self) -> f64 {
        inclusive_extent(self.x1, self.x2)
    }

    /// Inclusive height, clamped to zero.
    #[inline]
    pub fn height(&self) -> f64 {
        inclusive_extent(self.y1, self.y2)
    }

    /// Inclusive pixel area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Area of the overlap with `other`, zero when disjoint.
    #[inline]
    pub fn intersection(&self, other: &BoundingBox) -> f64 {
        let w = inclusive_extent(self.x1.max(other.x1), self.x2.min(other.x2));
        let h = inclusive_extent(self.y1.max(other.y1), self.y2.min(other.y2));
        w * h
    }

    /// Intersection-over-union with `other`.
    pub fn iou(&self, other: &BoundingBox) -> f64 {
        iou_with_areas(self, self.area(), other, other.area())
    }
}

impl From<[f32; 4]> for BoundingBox {
    fn from([x1, y1, x2, y2]: [f32; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<BoundingBox> for [f32; 4] {
    fn from(value: BoundingBox) -> Self {
        [value.x1, value.y1, value.x2, value.y2]
    }
}

#[inline]
fn inclusive_extent(lo: f32, hi: f32) -> f64 {
    (f64::from(hi) - f64::from(lo) + 1.0).max(0.0)
}

/// IoU using precomputed areas. A non-positive union yields 0.
#[inline]
pub(crate) fn iou_with_areas(
    a: &BoundingBox,
    area_a: f64,
    b: &BoundingBox,
    area_b: f64,
) -> f64 {
    let inter = a.intersection(b);
    let union = area_a + area_b - inter;
    if union > 0.0 {
        inter / union
    } else {
        0.0
    }
}
