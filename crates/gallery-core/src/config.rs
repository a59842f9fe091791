use crate::constants::*;
use crate::orientation::Orientation;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("inertia damping must lie in (0, 1), got {0}")]
    DampingOutOfRange(f32),
    #[error("auto-rotate interval must be at least 1 ms")]
    ZeroInterval,
    #[error("auto-rotate interval must fit a browser timer delay, got {0} ms")]
    IntervalTooLarge(u32),
}

/// Tuning for [`crate::OrientationController`].
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    pub initial: Orientation,
    /// Degrees of rotation per pixel of drag.
    pub sensitivity: f32,
    pub inertia_damping: f32,
    pub momentum_epsilon: f32,
    /// Yaw added on every auto-rotate tick.
    pub auto_rotate_step_deg: f32,
    /// Timer delay, at most `i32::MAX` as `setInterval` takes a signed delay.
    pub auto_rotate_interval_ms: u32,
    pub key_step_deg: f32,
    pub key_step_duration_ms: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            initial: Orientation::default(),
            sensitivity: DRAG_SENSITIVITY,
            inertia_damping: INERTIA_DAMPING,
            momentum_epsilon: MOMENTUM_EPSILON,
            auto_rotate_step_deg: AUTO_ROTATE_STEP_DEG,
            auto_rotate_interval_ms: AUTO_ROTATE_INTERVAL_MS,
            key_step_deg: KEY_STEP_DEG,
            key_step_duration_ms: KEY_STEP_DURATION_MS,
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("initial pitch", self.initial.pitch as f64)?;
        finite("initial yaw", self.initial.yaw as f64)?;
        finite("auto-rotate step", self.auto_rotate_step_deg as f64)?;
        finite("key step", self.key_step_deg as f64)?;
        positive("sensitivity", self.sensitivity as f64)?;
        positive("momentum epsilon", self.momentum_epsilon as f64)?;
        positive("key step duration", self.key_step_duration_ms)?;
        if !(self.inertia_damping > 0.0 && self.inertia_damping < 1.0) {
            return Err(ConfigError::DampingOutOfRange(self.inertia_damping));
        }
        if self.auto_rotate_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if i32::try_from(self.auto_rotate_interval_ms).is_err() {
            return Err(ConfigError::IntervalTooLarge(self.auto_rotate_interval_ms));
        }
        Ok(())
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_nan() {
        assert!(positive("x", 1.0).is_ok());
        assert_eq!(
            positive("x", 0.0),
            Err(ConfigError::NotPositive { name: "x", value: 0.0 })
        );
        assert!(matches!(
            positive("x", f64::NAN),
            Err(ConfigError::NotFinite { name: "x", .. })
        ));
    }
}
