use super::*;

#[test]
fn euler_deserializes_from_array_and_object() {
    let a: EulerAngles = serde_json::from_str("[10, -5.5, 2]").unwrap();
    assert_eq!(a, EulerAngles::new(10.0, -5.5, 2.0));

    let b: EulerAngles = serde_json::from_str(r#"{"yaw": 10, "pitch": -5.5, "roll": 2}"#).unwrap();
    assert_eq!(a, b);

    assert!(serde_json::from_str::<EulerAngles>("[1, 2]").is_err());
}

#[test]
fn euler_finite_check() {
    assert!(EulerAngles::ZERO.is_finite());
    assert!(!EulerAngles::new(0.0, f64::NAN, 0.0).is_finite());
    assert!(!EulerAngles::new(f64::INFINITY, 0.0, 0.0).is_finite());
}

#[test]
fn resolution_rejects_zero_sides() {
    assert!(Resolution::new(0, 1080).is_err());
    assert!(Resolution::new(1920, 0).is_err());
    assert!(Resolution::new(1920, 1080).is_ok());
}

#[test]
fn fitted_pixels_keeps_width_for_wide_panoramas() {
    let res = Resolution::new(1920, 1080).unwrap();
    // 4:1 panorama is wider than 16:9, so width is kept and height follows.
    let px = res.fitted_pixels(FieldOfView::new(360.0, 90.0));
    assert!((px - 1920.0 * 480.0).abs() < 1e-6);
}

#[test]
fn fitted_pixels_keeps_height_for_tall_panoramas() {
    let res = Resolution::new(1920, 1080).unwrap();
    let px = res.fitted_pixels(FieldOfView::new(60.0, 60.0));
    assert!((px - 1080.0 * 1080.0).abs() < 1e-6);
}
