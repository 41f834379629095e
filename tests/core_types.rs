use boxnms::{gather, nms, BoundingBox, NmsConfig, NmsError, NmsSelector};

#[test]
fn empty_input_is_success() {
    let keep = nms(&[], &[], 0.5).unwrap();
    assert!(keep.is_empty());

    let keep = NmsSelector::new(0.0).select(&[], &[]).unwrap();
    assert!(keep.is_empty());
}

#[test]
fn mismatched_lengths_are_reported() {
    let boxes = [BoundingBox::new(0.0, 0.0, 1.0, 1.0); 3];

    let err = nms(&boxes, &[0.5, 0.4], 0.5).unwrap_err();
    assert_eq!(err, NmsError::ShapeMismatch { boxes: 3, scores: 2 });

    let err = nms(&[], &[0.5], 0.5).unwrap_err();
    assert_eq!(err, NmsError::ShapeMismatch { boxes: 0, scores: 1 });
}

#[test]
fn nan_threshold_is_reported() {
    let boxes = [BoundingBox::new(0.0, 0.0, 1.0, 1.0)];
    let err = nms(&boxes, &[0.5], f32::NAN).unwrap_err();
    assert!(matches!(err, NmsError::InvalidThreshold(t) if t.is_nan()));
}

#[test]
fn nan_score_is_reported() {
    let boxes = [BoundingBox::new(0.0, 0.0, 1.0, 1.0); 2];
    let err = nms(&boxes, &[0.5, f32::NAN], 0.5).unwrap_err();
    assert_eq!(err, NmsError::InvalidScore { index: 1 });
}

#[test]
fn nan_box_is_reported_instead_of_suppressing() {
    let bad = BoundingBox::new(f32::NAN, 0.0, 5.0, 9.0);
    let real = BoundingBox::new(0.0, 0.0, 9.0, 9.0);

    let err = nms(&[bad, real], &[0.9, 0.8], 0.5).unwrap_err();
    assert_eq!(err, NmsError::InvalidBox { index: 0 });

    let err = NmsSelector::new(0.5)
        .select(&[real, bad], &[0.9, 0.8])
        .unwrap_err();
    assert_eq!(err, NmsError::InvalidBox { index: 1 });
    assert_eq!(err.to_string(), "invalid box at index 1");
}

#[test]
fn large_boxes_use_exact_areas() {
    // Both areas exceed 2^24 pixels; IoU = 40 * 5001 / (2 * 5001^2 - 40 * 5001).
    let a = BoundingBox::new(0.0, 0.0, 5000.0, 5000.0);
    let b = BoundingBox::new(4961.0, 0.0, 9961.0, 5000.0);
    let iou = a.iou(&b);
    assert_eq!(iou, (40.0 * 5001.0) / (2.0 * 5001.0 * 5001.0 - 40.0 * 5001.0));

    assert_eq!(nms(&[a, b], &[0.9, 0.8], iou as f32 - 1e-6).unwrap(), vec![0]);
    assert_eq!(nms(&[a, b], &[0.9, 0.8], iou as f32 + 1e-6).unwrap(), vec![0, 1]);
}

#[test]
fn error_messages_name_the_problem() {
    let err = NmsError::ShapeMismatch { boxes: 4, scores: 3 };
    assert_eq!(err.to_string(), "shape mismatch: 4 boxes but 3 scores");
    let err = NmsError::InvalidScore { index: 7 };
    assert_eq!(err.to_string(), "invalid score at index 7");
}

#[test]
fn out_of_range_threshold_is_accepted() {
    let boxes = [
        BoundingBox::new(0.0, 0.0, 9.0, 9.0),
        BoundingBox::new(0.0, 0.0, 9.0, 9.0),
    ];
    assert_eq!(nms(&boxes, &[0.9, 0.8], 1.5).unwrap(), vec![0, 1]);
    assert_eq!(nms(&boxes, &[0.9, 0.8], -1.0).unwrap(), vec![0]);
}

#[test]
fn selector_exposes_config() {
    let cfg = NmsConfig {
        iou_threshold: 0.45,
        max_detections: Some(100),
        ..NmsConfig::default()
    };
    let selector = NmsSelector::default().with_config(cfg);
    assert_eq!(*selector.config(), cfg);
    assert_eq!(NmsSelector::new(0.7).config().iou_threshold, 0.7);
    assert_eq!(NmsConfig::default().iou_threshold, 0.5);
}

#[test]
fn gather_filters_caller_arrays() {
    let boxes = [
        BoundingBox::new(100.0, 100.0, 210.0, 210.0),
        BoundingBox::new(105.0, 105.0, 215.0, 215.0),
        BoundingBox::new(150.0, 150.0, 250.0, 250.0),
    ];
    let scores = [0.9, 0.75, 0.6];
    let keep = nms(&boxes, &scores, 0.3).unwrap();

    assert_eq!(gather(&boxes, &keep), vec![boxes[0], boxes[2]]);
    assert_eq!(gather(&scores, &keep), vec![0.9, 0.6]);
}
