//! Shared utility helpers.

pub mod error;

pub use error::{NmsError, NmsResult};

/// Returns the items at `keep`, in keep order.
///
/// Indices outside `items` are skipped.
pub fn gather<T: Clone>(items: &[T], keep: &[usize]) -> Vec<T> {
    keep.iter().filter_map(|&idx| items.get(idx).cloned()).collect()
}
