//! Sequential suppression kernel.

use crate::kernel::{BoxArena, SuppressKernel};

/// Single-threaded write-cursor compaction.
pub struct ScalarSuppress;

impl SuppressKernel for ScalarSuppress {
    fn suppress(
        arena: &BoxArena<'_>,
        kept: usize,
        candidates: &mut [usize],
        iou_threshold: f32,
    ) -> usize {
        let iou_threshold = f64::from(iou_threshold);
        let mut write = 0usize;
        for read in 0..candidates.len() {
            let j = candidates[read];
            if arena.iou(kept, j) <= iou_threshold {
                candidates[write] = j;
                write += 1;
            }
        }
        write
    }
}
