use crate::foundation::error::{PtanimError, PtanimResult};
use serde::Deserialize;

/// Orientation as yaw (Z), pitch (Y), roll (X) in degrees, applied intrinsically in that order.
///
/// Angles are not normalized into any canonical range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerAngles {
    /// Rotation about Z, in degrees.
    pub yaw: f64,
    /// Rotation about Y, in degrees.
    pub pitch: f64,
    /// Rotation about X, in degrees.
    pub roll: f64,
}

impl EulerAngles {
    /// Zero rotation.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create angles from yaw, pitch and roll in degrees.
    pub const fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Return `true` when all three angles are finite.
    pub fn is_finite(self) -> bool {
        self.yaw.is_finite() && self.pitch.is_finite() && self.roll.is_finite()
    }
}

impl<'de> Deserialize<'de> for EulerAngles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 3]),
            Obj { yaw: f64, pitch: f64, roll: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([yaw, pitch, roll]) => Ok(Self::new(yaw, pitch, roll)),
            Repr::Obj { yaw, pitch, roll } => Ok(Self::new(yaw, pitch, roll)),
        }
    }
}

/// Panorama field of view in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldOfView {
    /// Horizontal extent in degrees.
    pub hfov: f64,
    /// Vertical extent in degrees.
    pub vfov: f64,
}

impl FieldOfView {
    /// Create a field of view from horizontal and vertical extents.
    pub const fn new(hfov: f64, vfov: f64) -> Self {
        Self { hfov, vfov }
    }

    /// Horizontal over vertical extent.
    pub fn aspect(self) -> f64 {
        self.hfov / self.vfov
    }
}

/// Desired output resolution in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a validated resolution with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> PtanimResult<Self> {
        if width == 0 || height == 0 {
            return Err(PtanimError::validation(
                "resolution width/height must be non-zero",
            ));
        }
        Ok(Self { width, height })
    }

    /// Width over height.
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Output pixel count for a panorama with `fov`, fitted inside this resolution.
    ///
    /// The side whose aspect constraint is tighter is kept at full size and the other is derived
    /// from the panorama's own aspect ratio.
    pub fn fitted_pixels(self, fov: FieldOfView) -> f64 {
        let target = self.aspect();
        let pano = fov.aspect();
        let (w, h) = if pano > target {
            let w = f64::from(self.width);
            (w, w / pano)
        } else {
            let h = f64::from(self.height);
            (h * pano, h)
        };
        w * h
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
