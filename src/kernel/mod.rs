//! Suppression kernels.
//!
//! A kernel performs one suppression pass: given the box just kept and the
//! live slice of the working order, it compacts the survivors (IoU at or
//! below the threshold) to the front of the slice, preserving their order,
//! and returns how many survived.

use crate::geometry::{iou_with_areas, BoundingBox};

/// Boxes paired with their precomputed inclusive areas.
pub struct BoxArena<'a> {
    boxes: &'a [BoundingBox],
    areas: Vec<f64>,
}

impl<'a> BoxArena<'a> {
    /// Precomputes areas for `boxes`.
    pub fn new(boxes: &'a [BoundingBox]) -> Self {
        let areas = boxes.iter().map(BoundingBox::area).collect();
        Self { boxes, areas }
    }

    /// Number of boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns `true` when the arena holds no boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Precomputed area of box `idx`.
    pub fn area(&self, idx: usize) -> f64 {
        self.areas[idx]
    }

    /// IoU between boxes `i` and `j`.
    #[inline]
    pub fn iou(&self, i: usize, j: usize) -> f64 {
        iou_with_areas(&self.boxes[i], self.areas[i], &self.boxes[j], self.areas[j])
    }
}

/// One suppression pass over the working order.
pub trait SuppressKernel {
    /// Moves every index in `candidates` whose IoU with `kept` is at most
    /// `iou_threshold` to the front, in order, and returns their count.
    fn suppress(
        arena: &BoxArena<'_>,
        kept: usize,
        candidates: &mut [usize],
        iou_threshold: f32,
    ) -> usize;
}

pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;
