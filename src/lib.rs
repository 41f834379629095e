//! boxnms is a greedy IoU non-maximum suppression library for axis-aligned
//! detection boxes.
//!
//! Boxes use inclusive pixel coordinates (`area = (x2 - x1 + 1) * (y2 - y1 + 1)`).
//! Selection visits boxes highest score first, keeps the best remaining box
//! and drops every remaining box whose IoU with it exceeds the threshold.
//! Suppression passes can run on rayon via the `rayon` feature, and the
//! `tracing` feature emits a span per selection call.
//!
//! ```
//! use boxnms::{nms, BoundingBox};
//!
//! let boxes = [
//!     BoundingBox::new(100.0, 100.0, 210.0, 210.0),
//!     BoundingBox::new(105.0, 105.0, 215.0, 215.0),
//!     BoundingBox::new(150.0, 150.0, 250.0, 250.0),
//! ];
//! let keep = nms(&boxes, &[0.9, 0.75, 0.6], 0.3).unwrap();
//! assert_eq!(keep, vec![0, 2]);
//! ```

pub mod geometry;
pub mod kernel;
pub mod nms;
mod trace;
pub mod util;

pub use geometry::BoundingBox;
pub use nms::{nms, score_order, NmsConfig, NmsSelector};
pub use util::{gather, NmsError, NmsResult};
