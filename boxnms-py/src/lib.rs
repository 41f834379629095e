//! Python bindings for boxnms.
//!
//! Exposes `nms(boxes, scores, iou_threshold)` over numpy arrays and an
//! `NmsSelector` class carrying the full selection config.

use numpy::{PyReadonlyArray1, PyReadonlyArray2, PyUntypedArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use boxnms::{
    BoundingBox, NmsConfig as RustNmsConfig, NmsError, NmsSelector as RustNmsSelector,
};

/// All boxnms errors describe bad caller input.
fn to_py_err(err: NmsError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn boxes_from_array(boxes: &PyReadonlyArray2<'_, f32>) -> PyResult<Vec<BoundingBox>> {
    let shape = boxes.shape();
    if shape[1] != 4 && shape[0] != 0 {
        return Err(to_py_err(NmsError::InvalidInput("boxes must have shape (N, 4)")));
    }
    let view = boxes.as_array();
    Ok(view
        .rows()
        .into_iter()
        .map(|row| BoundingBox::new(row[0], row[1], row[2], row[3]))
        .collect())
}

fn scores_from_array(scores: &PyReadonlyArray1<'_, f32>) -> Vec<f32> {
    scores.as_array().iter().copied().collect()
}

/// Greedy NMS selector with a fixed configuration.
#[pyclass]
#[derive(Clone)]
pub struct NmsSelector {
    inner: RustNmsSelector,
}

#[pymethods]
impl NmsSelector {
    #[new]
    #[pyo3(signature = (iou_threshold = 0.5, min_score = None, max_detections = None, parallel = false))]
    fn new(
        iou_threshold: f32,
        min_score: Option<f32>,
        max_detections: Option<usize>,
        parallel: bool,
    ) -> PyResult<Self> {
        if iou_threshold.is_nan() {
            return Err(to_py_err(NmsError::InvalidThreshold(iou_threshold)));
        }
        let cfg = RustNmsConfig {
            iou_threshold,
            min_score,
            max_detections,
            parallel,
        };
        Ok(Self {
            inner: RustNmsSelector::default().with_config(cfg),
        })
    }

    /// Returns indices of kept boxes, highest score first.
    fn select(
        &self,
        boxes: PyReadonlyArray2<'_, f32>,
        scores: PyReadonlyArray1<'_, f32>,
    ) -> PyResult<Vec<usize>> {
        let boxes = boxes_from_array(&boxes)?;
        let scores = scores_from_array(&scores);
        self.inner.select(&boxes, &scores).map_err(to_py_err)
    }

    #[getter]
    fn iou_threshold(&self) -> f32 {
        self.inner.config().iou_threshold
    }

    fn __repr__(&self) -> String {
        let cfg = self.inner.config();
        format!(
            "NmsSelector(iou_threshold={}, min_score={:?}, max_detections={:?}, parallel={})",
            cfg.iou_threshold, cfg.min_score, cfg.max_detections, cfg.parallel
        )
    }
}

/// Greedy non-maximum suppression.
///
/// Args:
///     boxes: float32 array of shape (N, 4) holding x1, y1, x2, y2
///     scores: float32 array of shape (N,)
///     iou_threshold: boxes overlapping a kept box by more than this are dropped
///
/// Returns:
///     list of kept indices, highest score first
#[pyfunction]
#[pyo3(signature = (boxes, scores, iou_threshold = 0.5))]
fn nms(
    boxes: PyReadonlyArray2<'_, f32>,
    scores: PyReadonlyArray1<'_, f32>,
    iou_threshold: f32,
) -> PyResult<Vec<usize>> {
    let boxes = boxes_from_array(&boxes)?;
    let scores = scores_from_array(&scores);
    boxnms::nms(&boxes, &scores, iou_threshold).map_err(to_py_err)
}

/// Python module for boxnms.
#[pymodule]
fn _boxnms(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<NmsSelector>()?;
    m.add_function(wrap_pyfunction!(nms, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
