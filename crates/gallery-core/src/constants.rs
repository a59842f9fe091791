// Shared tuning constants for the cube gallery.

// Orientation at page start (degrees)
pub const INITIAL_PITCH_DEG: f32 = -25.0;
pub const INITIAL_YAW_DEG: f32 = 45.0;

// Drag
pub const DRAG_SENSITIVITY: f32 = 0.8; // degrees per pixel of pointer motion

// Post-drag inertia
pub const INERTIA_DAMPING: f32 = 0.95; // momentum multiplier per frame
pub const MOMENTUM_EPSILON: f32 = 0.1; // below this on both axes inertia stops

// Idle auto-rotate
pub const AUTO_ROTATE_STEP_DEG: f32 = 0.3; // yaw increment per tick
pub const AUTO_ROTATE_INTERVAL_MS: u32 = 16; // ~60 Hz

// Arrow-key steps
pub const KEY_STEP_DEG: f32 = 90.0;
pub const KEY_STEP_DURATION_MS: f64 = 500.0;

// Hearts
pub const HEART_SPAWN_INTERVAL_MS: u32 = 300;
pub const HEART_BURST_MIN: usize = 2;
pub const HEART_BURST_MAX: usize = 3;
pub const HEART_LIFETIME_MS: u32 = 3000;
pub const HEART_SIZE_MIN_PX: f32 = 15.0;
pub const HEART_SIZE_SPAN_PX: f32 = 20.0;
pub const HEART_TINT_MIN: f32 = 160.0; // green/blue channel floor
pub const HEART_TINT_SPAN: f32 = 30.0;
pub const HEART_FLOAT_MIN_SEC: f32 = 3.0;
pub const HEART_FLOAT_SPAN_SEC: f32 = 2.0;

// Strawberry rain
pub const STRAWBERRY_MAX: usize = 40;
pub const STRAWBERRY_STAGGER_MS: u32 = 400;
pub const STRAWBERRY_SIZE_MIN_PX: f32 = 20.0;
pub const STRAWBERRY_SIZE_SPAN_PX: f32 = 15.0;
pub const STRAWBERRY_FALL_MIN_SEC: f32 = 5.0;
pub const STRAWBERRY_FALL_SPAN_SEC: f32 = 5.0;
pub const STRAWBERRY_DELAY_MAX_SEC: f32 = 3.0;
pub const STRAWBERRY_HUE_MAX_DEG: f32 = 10.0;
pub const STRAWBERRY_GLOW_MIN_ALPHA: f32 = 0.5;
pub const STRAWBERRY_GLOW_SPAN_ALPHA: f32 = 0.3;
