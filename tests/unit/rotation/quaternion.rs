use super::*;

fn assert_angles_close(a: EulerAngles, b: EulerAngles, tol: f64) {
    assert!(
        (a.yaw - b.yaw).abs() < tol && (a.pitch - b.pitch).abs() < tol && (a.roll - b.roll).abs() < tol,
        "{a:?} != {b:?}"
    );
}

fn assert_quat_close(a: Quaternion, b: Quaternion, tol: f64) {
    assert!(
        (a.w - b.w).abs() < tol
            && (a.x - b.x).abs() < tol
            && (a.y - b.y).abs() < tol
            && (a.z - b.z).abs() < tol,
        "{a:?} != {b:?}"
    );
}

#[test]
fn from_euler_pure_yaw_matches_half_angle() {
    let q = Quaternion::from_euler(EulerAngles::new(90.0, 0.0, 0.0));
    let h = std::f64::consts::FRAC_1_SQRT_2;
    assert_quat_close(q, Quaternion::new(h, 0.0, 0.0, h), 1e-12);
}

#[test]
fn from_euler_is_unit_length() {
    for (y, p, r) in [(0.0, 0.0, 0.0), (33.0, -71.0, 150.0), (-400.0, 89.9, 12.5)] {
        let q = Quaternion::from_euler(EulerAngles::new(y, p, r));
        assert!((q.norm() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn euler_roundtrip_inside_gimbal_limits() {
    let mut yaw = -170.0;
    while yaw < 171.0 {
        let mut pitch = -88.0;
        while pitch < 89.0 {
            for roll in [-165.0, -45.5, 0.0, 12.25, 179.0] {
                let e = EulerAngles::new(yaw, pitch, roll);
                let back = Quaternion::from_euler(e).to_euler();
                assert_angles_close(back, e, 1e-6);
            }
            pitch += 22.0;
        }
        yaw += 34.0;
    }
}

#[test]
fn compose_with_identity_is_noop() {
    let q = Quaternion::from_euler(EulerAngles::new(25.0, -10.0, 70.0));
    assert_eq!(Quaternion::compose(q, Quaternion::IDENTITY), q);
    assert_eq!(Quaternion::compose(Quaternion::IDENTITY, q), q);
    assert_eq!(Quaternion::default(), Quaternion::IDENTITY);
}

#[test]
fn compose_adds_yaw_about_same_axis() {
    let a = Quaternion::from_euler(EulerAngles::new(10.0, 0.0, 0.0));
    let b = Quaternion::from_euler(EulerAngles::new(20.0, 0.0, 0.0));
    assert_angles_close((a * b).to_euler(), EulerAngles::new(30.0, 0.0, 0.0), 1e-9);
}

#[test]
fn compose_applies_right_operand_first() {
    let yaw = Quaternion::from_euler(EulerAngles::new(90.0, 0.0, 0.0));
    let roll = Quaternion::from_euler(EulerAngles::new(0.0, 0.0, 90.0));
    // Intrinsic Z-Y-X: yaw applied on top of an existing roll is exactly (90, 0, 90).
    assert_angles_close((yaw * roll).to_euler(), EulerAngles::new(90.0, 0.0, 90.0), 1e-9);
    assert_ne!(yaw * roll, roll * yaw);
}

#[test]
fn to_euler_clamps_past_gimbal_lock() {
    // Slightly over unit length so that 1 - 2(wy - xz) is negative.
    let q = Quaternion::new(0.707_106_8, 0.0, 0.707_106_8, 0.0);
    let e = q.to_euler();
    assert!(e.is_finite());
    assert!((e.pitch - 90.0).abs() < 1e-9);

    let q = Quaternion::new(0.707_106_8, 0.0, -0.707_106_8, 0.0);
    assert!((q.to_euler().pitch + 90.0).abs() < 1e-9);
}

#[test]
fn to_euler_propagates_nan() {
    let e = Quaternion::new(f64::NAN, 0.0, 0.0, 0.0).to_euler();
    assert!(!e.is_finite());
}

#[test]
fn rotate_orientation_accumulates() {
    let delta = Quaternion::from_euler(EulerAngles::new(10.0, 0.0, 0.0));
    let mut o = EulerAngles::ZERO;
    for _ in 0..3 {
        o = rotate_orientation(delta, o);
    }
    assert_angles_close(o, EulerAngles::new(30.0, 0.0, 0.0), 1e-9);
}
