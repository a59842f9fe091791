//! Cube orientation controller.
//!
//! Four input sources (pointer drag, touch drag, arrow keys and the idle
//! auto-rotate timer) compete for the same two angles. The controller keeps
//! them apart with a single [`Mode`]: every input requests a transition, and
//! the mode in turn names the one [`Task`] the host should keep scheduled.
//! The host never mutates angles directly; it only forwards events and drives
//! whichever task is requested.

use crate::config::{ConfigError, ControllerConfig};
use crate::orientation::{ease_out_cubic, Orientation};
use glam::Vec2;

/// Sink for the rendered orientation, e.g. the cube element's inline style.
pub trait RenderTarget {
    fn render(&mut self, transform: &str);
}

/// Scheduled job the host must keep alive for the current mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Task {
    None,
    /// Recurring timer every `auto_rotate_interval_ms`.
    AutoRotate,
    /// Per-frame callback calling [`OrientationController::step_inertia`].
    Inertia,
    /// Per-frame callback calling [`OrientationController::step_key`].
    KeyStep,
}

impl Task {
    /// Whether the task is driven by animation frames rather than a timer.
    pub fn is_frame_driven(self) -> bool {
        matches!(self, Task::Inertia | Task::KeyStep)
    }
}

/// In-flight arrow-key rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyStep {
    pub start: Orientation,
    pub target: Orientation,
    pub started_at_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    /// Nothing is moving the cube.
    Idle,
    AutoRotate,
    Dragging { last: Vec2, momentum: Vec2 },
    Inertia { momentum: Vec2 },
    KeyStep(KeyStep),
}

impl Mode {
    pub fn task(&self) -> Task {
        match self {
            Mode::Idle | Mode::Dragging { .. } => Task::None,
            Mode::AutoRotate => Task::AutoRotate,
            Mode::Inertia { .. } => Task::Inertia,
            Mode::KeyStep(_) => Task::KeyStep,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::AutoRotate => "auto-rotate",
            Mode::Dragging { .. } => "dragging",
            Mode::Inertia { .. } => "inertia",
            Mode::KeyStep(_) => "key-step",
        }
    }
}

pub struct OrientationController<T: RenderTarget> {
    orientation: Orientation,
    mode: Mode,
    config: ControllerConfig,
    target: T,
}

impl<T: RenderTarget> OrientationController<T> {
    /// Build a controller at `config.initial`. Nothing is rendered until
    /// [`apply_transform`](Self::apply_transform) or the first mutation.
    pub fn new(config: ControllerConfig, target: T) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            orientation: config.initial,
            mode: Mode::Idle,
            config,
            target,
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn task(&self) -> Task {
        self.mode.task()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, Mode::Dragging { .. })
    }

    pub fn apply_transform(&mut self) {
        let transform = self.orientation.css_transform();
        self.target.render(&transform);
    }

    fn set_mode(&mut self, mode: Mode) {
        if std::mem::discriminant(&self.mode) != std::mem::discriminant(&mode) {
            log::debug!("[cube] {} -> {}", self.mode.name(), mode.name());
        }
        self.mode = mode;
    }

    /// Advance by `sensitivity`-scaled pointer delta. Vertical motion is
    /// inverted so dragging up tilts the top face away.
    fn nudge(&mut self, delta: Vec2) {
        self.orientation.yaw += delta.x * self.config.sensitivity;
        self.orientation.pitch -= delta.y * self.config.sensitivity;
        self.apply_transform();
    }

    /// Grab the cube at `pos`. Returns `false` if a drag is already active.
    pub fn begin_drag(&mut self, pos: Vec2) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.set_mode(Mode::Dragging {
            last: pos,
            momentum: Vec2::ZERO,
        });
        true
    }

    /// Returns `false` when no drag is active.
    pub fn continue_drag(&mut self, pos: Vec2) -> bool {
        let Mode::Dragging { last, .. } = self.mode else {
            return false;
        };
        let delta = pos - last;
        self.mode = Mode::Dragging {
            last: pos,
            momentum: delta,
        };
        self.nudge(delta);
        true
    }

    /// Release the cube, handing the last pointer delta to inertia. Returns
    /// `false` when no drag is active.
    pub fn end_drag(&mut self) -> bool {
        let Mode::Dragging { momentum, .. } = self.mode else {
            return false;
        };
        if self.momentum_settled(momentum) {
            self.set_mode(Mode::AutoRotate);
        } else {
            self.set_mode(Mode::Inertia { momentum });
        }
        true
    }

    fn momentum_settled(&self, momentum: Vec2) -> bool {
        let eps = self.config.momentum_epsilon;
        momentum.x.abs() < eps && momentum.y.abs() < eps
    }

    /// One inertia frame. Returns `true` while inertia should keep running.
    pub fn step_inertia(&mut self) -> bool {
        let Mode::Inertia { momentum } = self.mode else {
            return false;
        };
        if self.momentum_settled(momentum) {
            self.set_mode(Mode::AutoRotate);
            return false;
        }
        self.nudge(momentum);
        self.mode = Mode::Inertia {
            momentum: momentum * self.config.inertia_damping,
        };
        true
    }

    /// Start an eased rotation by the given deltas (degrees). Ignored while a
    /// step is already in flight or the cube is being dragged.
    pub fn rotate_by(&mut self, delta_yaw: f32, delta_pitch: f32, now_ms: f64) -> bool {
        match self.mode {
            Mode::KeyStep(_) | Mode::Dragging { .. } => return false,
            _ => {}
        }
        let start = self.orientation;
        self.set_mode(Mode::KeyStep(KeyStep {
            start,
            target: start.offset(delta_yaw, delta_pitch),
            started_at_ms: now_ms,
        }));
        true
    }

    /// One key-step frame at `now_ms`. Returns `true` while the step is
    /// still animating.
    pub fn step_key(&mut self, now_ms: f64) -> bool {
        let Mode::KeyStep(step) = self.mode else {
            return false;
        };
        let elapsed = now_ms - step.started_at_ms;
        let progress = (elapsed / self.config.key_step_duration_ms).clamp(0.0, 1.0);
        self.orientation = step.start.lerp(&step.target, ease_out_cubic(progress as f32));
        self.apply_transform();
        if progress < 1.0 {
            return true;
        }
        self.set_mode(Mode::AutoRotate);
        false
    }

    /// Resume idle spinning. Returns `false` (no tick requested) when already
    /// spinning, dragging, or finishing a key step.
    pub fn start_auto_rotate(&mut self) -> bool {
        match self.mode {
            Mode::AutoRotate | Mode::Dragging { .. } | Mode::KeyStep(_) => false,
            Mode::Idle | Mode::Inertia { .. } => {
                self.set_mode(Mode::AutoRotate);
                true
            }
        }
    }

    pub fn stop_auto_rotate(&mut self) {
        if self.mode == Mode::AutoRotate {
            self.set_mode(Mode::Idle);
        }
    }

    /// One auto-rotate tick; skipped unless auto-rotate is the active mode.
    pub fn tick_auto_rotate(&mut self) {
        if self.mode != Mode::AutoRotate {
            return;
        }
        self.orientation.yaw += self.config.auto_rotate_step_deg;
        self.apply_transform();
    }
}
