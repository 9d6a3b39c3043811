//! Quaternion rotations and conversion to and from yaw/pitch/roll angles.

use crate::foundation::core::EulerAngles;
use std::f64::consts::FRAC_PI_2;
use std::ops::Mul;

/// Rotation quaternion `w + xi + yj + zk`.
///
/// Values built by [`Quaternion::from_euler`] are unit length. [`Quaternion::compose`] does not
/// renormalize, so long chains of compositions may drift slightly off unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    /// Real part.
    pub w: f64,
    /// `i` component.
    pub x: f64,
    /// `j` component.
    pub y: f64,
    /// `k` component.
    pub z: f64,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Create a quaternion from raw components.
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Build the rotation for intrinsic Z-Y-X (yaw, pitch, roll) angles given in degrees.
    pub fn from_euler(angles: EulerAngles) -> Self {
        let (sy, cy) = (angles.yaw.to_radians() * 0.5).sin_cos();
        let (sp, cp) = (angles.pitch.to_radians() * 0.5).sin_cos();
        let (sr, cr) = (angles.roll.to_radians() * 0.5).sin_cos();

        Self {
            w: cy * cp * cr + sy * sp * sr,
            x: cy * cp * sr - sy * sp * cr,
            y: sy * cp * sr + cy * sp * cr,
            z: sy * cp * cr - cy * sp * sr,
        }
    }

    /// Convert back to yaw, pitch, roll in degrees.
    ///
    /// Pitch is recovered as `2 * atan2(sqrt(1 + 2s), sqrt(1 - 2s)) - pi/2` with
    /// `s = wy - xz`. For a unit quaternion `|2s| <= 1`. Drift or the gimbal-lock boundary can
    /// push one of the square-root arguments slightly negative, so both are clamped at zero,
    /// which yields the limiting pitch of +/-90 degrees instead of NaN. Non-finite components
    /// still produce non-finite angles.
    pub fn to_euler(self) -> EulerAngles {
        let Self { w, x, y, z } = self;

        let sinr_cosp = 2.0 * (w * x + y * z);
        let cosr_cosp = 1.0 - 2.0 * (x * x + y * y);
        let roll = sinr_cosp.atan2(cosr_cosp);

        let s = 2.0 * (w * y - x * z);
        let sinp = (1.0 + s).max(0.0).sqrt();
        let cosp = (1.0 - s).max(0.0).sqrt();
        let pitch = 2.0 * sinp.atan2(cosp) - FRAC_PI_2;

        let siny_cosp = 2.0 * (w * z + x * y);
        let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
        let yaw = siny_cosp.atan2(cosy_cosp);

        EulerAngles::new(yaw.to_degrees(), pitch.to_degrees(), roll.to_degrees())
    }

    /// Hamilton product `u * v`: rotate by `v` first, then by `u`.
    pub fn compose(u: Self, v: Self) -> Self {
        Self {
            w: u.w * v.w - u.x * v.x - u.y * v.y - u.z * v.z,
            x: u.w * v.x + u.x * v.w + u.y * v.z - u.z * v.y,
            y: u.w * v.y - u.x * v.z + u.y * v.w + u.z * v.x,
            z: u.w * v.z + u.x * v.y - u.y * v.x + u.z * v.w,
        }
    }

    /// Euclidean norm of the four components.
    pub fn norm(self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::compose(self, rhs)
    }
}

/// Rotate `orientation` by `delta`, applied after the existing orientation.
pub fn rotate_orientation(delta: Quaternion, orientation: EulerAngles) -> EulerAngles {
    (delta * Quaternion::from_euler(orientation)).to_euler()
}

#[cfg(test)]
#[path = "../../tests/unit/rotation/quaternion.rs"]
mod tests;
