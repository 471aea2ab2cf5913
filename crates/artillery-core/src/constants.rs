//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Default playfield width in pixels (matches the camera frame).
pub const DEFAULT_ARENA_WIDTH: f64 = 640.0;

/// Default playfield height in pixels.
pub const DEFAULT_ARENA_HEIGHT: f64 = 480.0;

/// Default camera frame width; subjects are split at half of it.
pub const DEFAULT_CAMERA_WIDTH: f64 = 640.0;

// --- Tanks ---

pub const TANK_WIDTH: f64 = 40.0;
pub const TANK_HEIGHT: f64 = 20.0;

/// Left tank center as a fraction of arena width.
pub const LEFT_TANK_X_FRACTION: f64 = 0.1;

/// Right tank center as a fraction of arena width.
pub const RIGHT_TANK_X_FRACTION: f64 = 0.9;

/// Both tanks sit at this fraction of arena height.
pub const TANK_Y_FRACTION: f64 = 0.8;

// --- Pose interpretation ---

/// Keypoints must score strictly above this to replace the remembered one.
pub const CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Weight of the new sample in the exponential smoothing of angle and power.
pub const SMOOTHING_FACTOR: f64 = 0.6;

/// An at-ease actor starts setting once smoothed power drops below this.
pub const SETTING_ENTRY_POWER: f64 = 0.1;

/// Power gain over the hold baseline that restarts the hold timer.
pub const REDRAW_POWER_DELTA: f64 = 0.1;

/// How long power must plateau before the shot commits (ms).
pub const HOLD_TO_FIRE_MS: f64 = 3000.0;

// --- Side assignment ---

/// Shoulders above this score define a subject's horizontal center.
pub const SIDE_SHOULDER_CONFIDENCE: f64 = 0.5;

/// Observations considered per frame.
pub const MAX_SUBJECTS: usize = 2;

// --- Ballistics ---

/// Base gravity (px/s²).
pub const GRAVITY: f64 = 9.8;

/// Gameplay multiplier on gravity so arcs resolve within a couple of seconds.
pub const GRAVITY_MULTIPLIER: f64 = 40.0;

/// Effective downward acceleration applied to projectiles (px/s²).
pub const EFFECTIVE_GRAVITY: f64 = GRAVITY * GRAVITY_MULTIPLIER;

/// Launch speed at power 1.0 (px/s).
pub const LAUNCH_SPEED: f64 = 800.0;
