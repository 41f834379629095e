//! Score ordering and input validation.

use crate::util::{NmsError, NmsResult};
use crate::BoundingBox;

/// Indices of `scores` sorted by descending score.
///
/// The sort is stable, so equal scores keep ascending index order.
pub fn score_order(scores: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}

pub(crate) fn validate_inputs(
    boxes: &[BoundingBox],
    scores: &[f32],
    iou_threshold: f32,
) -> NmsResult<()> {
    if boxes.len() != scores.len() {
        return Err(NmsError::ShapeMismatch {
            boxes: boxes.len(),
            scores: scores.len(),
        });
    }
    if iou_threshold.is_nan() {
        return Err(NmsError::InvalidThreshold(iou_threshold));
    }
    if let Some(index) = scores.iter().position(|s| s.is_nan()) {
        return Err(NmsError::InvalidScore { index });
    }
    if let Some(index) = boxes.iter().position(BoundingBox::has_nan) {
        return Err(NmsError::InvalidBox { index });
    }
    Ok(())
}
