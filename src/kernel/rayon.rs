//! Rayon-parallel suppression kernel (feature-gated).
//!
//! IoUs against the kept box are evaluated in parallel; compaction stays
//! sequential so the surviving order matches [`super::scalar::ScalarSuppress`].

use crate::kernel::scalar::ScalarSuppress;
use crate::kernel::{BoxArena, SuppressKernel};
use rayon::prelude::*;

/// Below this many live candidates the pass runs sequentially.
const MIN_PARALLEL_CANDIDATES: usize = 512;

/// Parallel IoU evaluation followed by in-place compaction.
pub struct RayonSuppress;

impl SuppressKernel for RayonSuppress {
    fn suppress(
        arena: &BoxArena<'_>,
        kept: usize,
        candidates: &mut [usize],
        iou_threshold: f32,
    ) -> usize {
        if candidates.len() < MIN_PARALLEL_CANDIDATES {
            return ScalarSuppress::suppress(arena, kept, candidates, iou_threshold);
        }

        let iou_threshold = f64::from(iou_threshold);
        let survives: Vec<bool> = candidates
            .par_iter()
            .map(|&j| arena.iou(kept, j) <= iou_threshold)
            .collect();

        let mut write = 0usize;
        for (read, keep) in survives.into_iter().enumerate() {
            if keep {
                candidates[write] = candidates[read];
                write += 1;
            }
        }
        write
    }
}
