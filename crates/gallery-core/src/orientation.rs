//! Cube orientation model and the interpolation helpers used to animate it.

use crate::constants::{INITIAL_PITCH_DEG, INITIAL_YAW_DEG};

/// Rotation of the cube in degrees.
///
/// Angles are unbounded: a cube spun five times to the right reports
/// `yaw = 45 + 1800`, and the CSS transform handles the wraparound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            pitch: INITIAL_PITCH_DEG,
            yaw: INITIAL_YAW_DEG,
        }
    }
}

impl Orientation {
    pub const fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    /// CSS `transform` value for this orientation.
    pub fn css_transform(&self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", self.pitch, self.yaw)
    }

    /// Offset by `delta_yaw` / `delta_pitch` degrees.
    pub fn offset(&self, delta_yaw: f32, delta_pitch: f32) -> Self {
        Self {
            pitch: self.pitch + delta_pitch,
            yaw: self.yaw + delta_yaw,
        }
    }

    /// Component-wise interpolation towards `target` at eased progress `t`.
    pub fn lerp(&self, target: &Orientation, t: f32) -> Self {
        Self {
            pitch: lerp(self.pitch, target.pitch, t),
            yaw: lerp(self.yaw, target.yaw, t),
        }
    }
}

/// Cubic ease-out: `1 - (1 - p)^3` with `p` clamped to `[0, 1]`.
#[inline]
pub fn ease_out_cubic(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Linear interpolation that lands exactly on the endpoints.
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    if t <= 0.0 {
        start
    } else if t >= 1.0 {
        end
    } else {
        start + (end - start) * t
    }
}
