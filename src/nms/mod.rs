//! Greedy IoU non-maximum suppression.
//!
//! Boxes are visited in descending score order. The best remaining box is
//! kept and every remaining box whose IoU with it is strictly greater than
//! the threshold is dropped; boxes exactly at the threshold stay candidates.
//! The working order is a single index buffer that shrinks in place.

pub(crate) mod order;

#[cfg(feature = "rayon")]
use crate::kernel::rayon::RayonSuppress;
use crate::kernel::scalar::ScalarSuppress;
use crate::kernel::{BoxArena, SuppressKernel};
use crate::trace::{trace_event, trace_span};
use crate::util::{NmsError, NmsResult};
use crate::BoundingBox;

pub use order::score_order;

/// Selection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NmsConfig {
    /// Boxes with IoU above this against a kept box are suppressed.
    pub iou_threshold: f32,
    /// Boxes scoring below this never become candidates.
    pub min_score: Option<f32>,
    /// Stop once this many boxes are kept.
    pub max_detections: Option<usize>,
    /// Evaluate suppression passes with rayon (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for NmsConfig {
    fn default() -> Self {
        Self {
            iou_threshold: 0.5,
            min_score: None,
            max_detections: None,
            parallel: false,
        }
    }
}

/// Greedy highest-score-first box selector.
///
/// The selector holds only its configuration; every call works on its own
/// buffers, so one selector can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct NmsSelector {
    config: NmsConfig,
}

impl NmsSelector {
    /// Creates a selector with the given IoU threshold and default options.
    pub fn new(iou_threshold: f32) -> Self {
        Self {
            config: NmsConfig {
                iou_threshold,
                ..NmsConfig::default()
            },
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: NmsConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &NmsConfig {
        &self.config
    }

    /// Returns indices of the boxes to keep, in selection order.
    ///
    /// `boxes[i]` is scored by `scores[i]`. An empty input yields an empty
    /// result. Mismatched lengths, a NaN threshold, a NaN score or a box
    /// with a NaN coordinate are reported as errors.
    pub fn select(&self, boxes: &[BoundingBox], scores: &[f32]) -> NmsResult<Vec<usize>> {
        let cfg = &self.config;
        order::validate_inputs(boxes, scores, cfg.iou_threshold)?;
        if cfg.min_score.is_some_and(f32::is_nan) {
            return Err(NmsError::InvalidInput("min_score must not be NaN"));
        }

        let _span = trace_span!(
            "nms_select",
            boxes = boxes.len(),
            iou_threshold = cfg.iou_threshold
        )
        .entered();

        if boxes.is_empty() {
            return Ok(Vec::new());
        }

        let mut working = score_order(scores);
        if let Some(min_score) = cfg.min_score {
            working.retain(|&idx| scores[idx] >= min_score);
        }
        let candidates = working.len();

        let arena = BoxArena::new(boxes);
        let keep = if cfg.parallel {
            greedy_parallel(&arena, &mut working, cfg)
        } else {
            greedy::<ScalarSuppress>(&arena, &mut working, cfg)
        };

        trace_event!("nms_done", candidates = candidates, kept = keep.len());
        Ok(keep)
    }
}

/// Runs greedy NMS with default options.
///
/// Equivalent to `NmsSelector::new(iou_threshold).select(boxes, scores)`.
pub fn nms(boxes: &[BoundingBox], scores: &[f32], iou_threshold: f32) -> NmsResult<Vec<usize>> {
    NmsSelector::new(iou_threshold).select(boxes, scores)
}

fn greedy<K: SuppressKernel>(
    arena: &BoxArena<'_>,
    working: &mut [usize],
    cfg: &NmsConfig,
) -> Vec<usize> {
    let limit = cfg
        .max_detections
        .map_or(working.len(), |max| max.min(working.len()));
    let mut keep = Vec::with_capacity(limit);

    // Live candidates are working[start..end].
    let mut start = 0usize;
    let mut end = working.len();
    while start < end && keep.len() < limit {
        let kept = working[start];
        keep.push(kept);
        start += 1;
        let live = K::suppress(arena, kept, &mut working[start..end], cfg.iou_threshold);
        end = start + live;
    }
    keep
}

#[cfg(feature = "rayon")]
fn greedy_parallel(arena: &BoxArena<'_>, working: &mut [usize], cfg: &NmsConfig) -> Vec<usize> {
    greedy::<RayonSuppress>(arena, working, cfg)
}

#[cfg(not(feature = "rayon"))]
fn greedy_parallel(arena: &BoxArena<'_>, working: &mut [usize], cfg: &NmsConfig) -> Vec<usize> {
    greedy::<ScalarSuppress>(arena, working, cfg)
}
