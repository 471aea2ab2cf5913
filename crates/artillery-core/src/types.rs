//! Fundamental geometric and simulation types.
//!
//! Coordinates are canvas pixels: x grows to the right, y grows downward.

use serde::{Deserialize, Serialize};

/// 2D position on the playfield (pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity on the playfield (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Rectangular playfield. Projectiles outside it are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned tank hitbox, described by its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TankBox {
    pub center: Position,
    pub width: f64,
    pub height: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Speed magnitude (px/s).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Orientation of the velocity vector in canvas radians: `atan2(vy, vx)`.
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one fixed tick.
    pub fn advance(&mut self) {
        self.advance_by(self.dt());
    }

    /// Advance by one tick of arbitrary length.
    pub fn advance_by(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }

    /// Elapsed simulation time in milliseconds, the timestamp unit of the pose interpreter.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_secs * 1000.0
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_ARENA_WIDTH,
            height: crate::constants::DEFAULT_ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Inclusive bounds test: the edges still count as inside.
    pub fn contains(&self, pos: &Position) -> bool {
        !(pos.x < 0.0 || pos.x > self.width || pos.y < 0.0 || pos.y > self.height)
    }
}

impl TankBox {
    pub fn new(center: Position, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Strict containment: a point on the box edge is not a hit.
    pub fn contains(&self, pos: &Position) -> bool {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        pos.x > self.center.x - half_w
            && pos.x < self.center.x + half_w
            && pos.y > self.center.y - half_h
            && pos.y < self.center.y + half_h
    }

    /// Midpoint of the right edge (launch point of the left tank).
    pub fn right_edge(&self) -> Position {
        Position::new(self.center.x + self.width / 2.0, self.center.y)
    }

    /// Midpoint of the left edge (launch point of the right tank).
    pub fn left_edge(&self) -> Position {
        Position::new(self.center.x - self.width / 2.0, self.center.y)
    }
}
