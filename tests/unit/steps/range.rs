use super::*;

#[test]
fn descending_range_negates_step() {
    let r = StepRange::new(10.0, 0.0, 2.0).unwrap();
    assert_eq!(r.to_vec(), vec![10, 8, 6, 4, 2]);
    assert_eq!(r.step(), -2);
}

#[test]
fn ascending_range_excludes_end() {
    let r = StepRange::new(0.0, 10.0, 2.0).unwrap();
    assert_eq!(r.to_vec(), vec![0, 2, 4, 6, 8]);
    assert_eq!(r.len(), 5);
}

#[test]
fn equal_bounds_are_empty() {
    assert!(StepRange::new(5.0, 5.0, 1.0).unwrap().is_empty());
    assert!(StepRange::new(5.0, 5.0, 0.0).unwrap().is_empty());
}

#[test]
fn zero_step_with_distinct_bounds_is_degenerate() {
    let err = StepRange::new(0.0, 10.0, 0.0).unwrap_err();
    assert!(matches!(err, PtanimError::DegenerateRange { begin: 0, end: 10 }));

    // Fractional steps truncate to zero as well.
    assert!(matches!(
        StepRange::new(0.0, 10.0, 0.5),
        Err(PtanimError::DegenerateRange { .. })
    ));
}

#[test]
fn step_sign_follows_bounds_not_input() {
    assert_eq!(StepRange::new(0.0, 6.0, -2.0).unwrap().to_vec(), vec![0, 2, 4]);
    assert_eq!(StepRange::new(6.0, 0.0, -2.0).unwrap().to_vec(), vec![6, 4, 2]);
}

#[test]
fn fractional_bounds_truncate_toward_zero() {
    let r = StepRange::new(60.9, 30.2, 3.7).unwrap();
    assert_eq!(r.begin(), 60);
    assert_eq!(r.end(), 30);
    assert_eq!(r.to_vec(), vec![60, 57, 54, 51, 48, 45, 42, 39, 36, 33]);

    let r = StepRange::new(-2.5, 2.5, 1.0).unwrap();
    assert_eq!(r.to_vec(), vec![-2, -1, 0, 1]);
}

#[test]
fn uneven_span_includes_last_partial_stride() {
    assert_eq!(StepRange::new(0.0, 7.0, 3.0).unwrap().to_vec(), vec![0, 3, 6]);
    assert_eq!(StepRange::new(7.0, 0.0, 3.0).unwrap().to_vec(), vec![7, 4, 1]);
}

#[test]
fn range_is_restartable() {
    let r = StepRange::new(0.0, 4.0, 1.0).unwrap();
    let first: Vec<i64> = r.iter().collect();
    let second: Vec<i64> = r.into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(r.iter().len(), 4);
}

#[test]
fn non_finite_inputs_are_rejected() {
    assert!(matches!(
        StepRange::new(f64::NAN, 1.0, 1.0),
        Err(PtanimError::Validation(_))
    ));
    assert!(matches!(
        StepRange::new(0.0, f64::INFINITY, 1.0),
        Err(PtanimError::Validation(_))
    ));
}
