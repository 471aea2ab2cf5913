//! Scripted pose feed for headless runs.
//!
//! A `SyntheticArcher` renders a bow-draw gesture as COCO keypoints the way
//! a pose model would see a person facing an unmirrored camera: the
//! subject's right shoulder appears on the image's left. Seeded jitter and
//! dropout make the feed noisy but reproducible.

use std::f64::consts::{FRAC_PI_4, PI};

use glam::DVec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use artillery_core::enums::Side;
use artillery_core::pose::{Joint, Keypoint, PoseObservation};
use artillery_core::types::Arena;
use artillery_pose::roles::RoleMap;

/// Score given to keypoints that drop out.
const DROPOUT_SCORE: f64 = 0.2;

/// Score given to cleanly observed keypoints.
const CLEAN_SCORE: f64 = 0.9;

/// Draw profile of one shot cycle, repeated forever.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawScript {
    /// Hands together (zero draw).
    pub rest_secs: f64,
    /// Linear pull from zero to `draw`.
    pub draw_secs: f64,
    /// Holding at `draw`.
    pub hold_secs: f64,
    /// Plateau draw, as a fraction of shoulder width.
    pub draw: f64,
}

impl Default for DrawScript {
    fn default() -> Self {
        Self {
            rest_secs: 0.5,
            draw_secs: 1.0,
            hold_secs: 4.0,
            draw: 0.545,
        }
    }
}

impl DrawScript {
    pub fn cycle_secs(&self) -> f64 {
        self.rest_secs + self.draw_secs + self.hold_secs
    }

    /// Draw at `t` seconds since the script started.
    pub fn draw_at(&self, t: f64) -> f64 {
        let cycle = self.cycle_secs();
        if cycle <= 0.0 {
            return self.draw;
        }
        let t = t.rem_euclid(cycle);
        if t < self.rest_secs {
            0.0
        } else if t < self.rest_secs + self.draw_secs {
            self.draw * (t - self.rest_secs) / self.draw_secs
        } else {
            self.draw
        }
    }
}

/// A scripted player standing in front of the camera.
#[derive(Debug, Clone)]
pub struct SyntheticArcher {
    pub side: Side,
    /// Image x of the shoulder midpoint.
    pub center_x: f64,
    pub shoulder_y: f64,
    pub shoulder_width: f64,
    pub arm_length: f64,
    /// Raw aim angle of the aiming arm (image radians).
    pub aim_angle: f64,
    pub script: DrawScript,
    /// Uniform per-axis noise amplitude (px).
    pub jitter_px: f64,
    /// Probability that a keypoint comes back with a low score.
    pub dropout: f64,
}

impl SyntheticArcher {
    pub fn new(side: Side, center_x: f64, aim_angle: f64, script: DrawScript) -> Self {
        Self {
            side,
            center_x,
            shoulder_y: 200.0,
            shoulder_width: 100.0,
            arm_length: 120.0,
            aim_angle,
            script,
            jitter_px: 0.0,
            dropout: 0.0,
        }
    }

    pub fn with_noise(mut self, jitter_px: f64, dropout: f64) -> Self {
        self.jitter_px = jitter_px;
        self.dropout = dropout;
        self
    }

    /// Keypoints for this archer at `t` seconds.
    pub fn observe(&self, t: f64, rng: &mut ChaCha8Rng) -> PoseObservation {
        let half = self.shoulder_width / 2.0;
        let right_shoulder = DVec2::new(self.center_x - half, self.shoulder_y);
        let left_shoulder = DVec2::new(self.center_x + half, self.shoulder_y);

        let roles = RoleMap::for_side(self.side);
        let (active_shoulder, other_shoulder) = match self.side {
            Side::Left => (right_shoulder, left_shoulder),
            Side::Right => (left_shoulder, right_shoulder),
        };
        let active_wrist = active_shoulder + DVec2::from_angle(self.aim_angle) * self.arm_length;
        // The drawing hand travels from the aiming shoulder toward the other one.
        let power_wrist =
            active_shoulder + (other_shoulder - active_shoulder) * self.script.draw_at(t);

        let joints = [
            (Joint::Nose, DVec2::new(self.center_x, self.shoulder_y - 60.0)),
            (Joint::LeftShoulder, left_shoulder),
            (Joint::RightShoulder, right_shoulder),
            (roles.active_wrist, active_wrist),
            (roles.power_wrist, power_wrist),
            (Joint::LeftHip, DVec2::new(self.center_x + half * 0.8, self.shoulder_y + 150.0)),
            (Joint::RightHip, DVec2::new(self.center_x - half * 0.8, self.shoulder_y + 150.0)),
        ];

        let keypoints = joints
            .into_iter()
            .map(|(joint, point)| {
                let point = point + self.noise(rng);
                let score = if rng.gen::<f64>() < self.dropout {
                    DROPOUT_SCORE
                } else {
                    CLEAN_SCORE
                };
                Keypoint::named(joint, point.x, point.y, score)
            })
            .collect();

        PoseObservation::new(keypoints)
    }

    fn noise(&self, rng: &mut ChaCha8Rng) -> DVec2 {
        if self.jitter_px <= 0.0 {
            return DVec2::ZERO;
        }
        DVec2::new(
            rng.gen_range(-self.jitter_px..=self.jitter_px),
            rng.gen_range(-self.jitter_px..=self.jitter_px),
        )
    }
}

/// Two scripted archers sharing one seeded RNG.
#[derive(Debug, Clone)]
pub struct SyntheticDuel {
    pub left: SyntheticArcher,
    pub right: SyntheticArcher,
    rng: ChaCha8Rng,
}

impl SyntheticDuel {
    pub fn new(left: SyntheticArcher, right: SyntheticArcher, seed: u64) -> Self {
        Self {
            left,
            right,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Default duel on a 640-wide camera: the left player aims 45° up with
    /// a draw that lands on the right tank in the default arena; the right
    /// player under-draws and falls short.
    pub fn standard(camera_width: f64, seed: u64) -> Self {
        let left = SyntheticArcher::new(
            Side::Left,
            camera_width * 0.75,
            aim_for_elevation(Side::Left, FRAC_PI_4),
            DrawScript::default(),
        );
        let right = SyntheticArcher::new(
            Side::Right,
            camera_width * 0.25,
            aim_for_elevation(Side::Right, FRAC_PI_4),
            DrawScript {
                draw: 0.3,
                ..DrawScript::default()
            },
        );
        Self::new(left, right, seed)
    }

    /// Same as `standard`, with jitter and dropout on both archers.
    pub fn noisy(camera_width: f64, seed: u64, jitter_px: f64, dropout: f64) -> Self {
        let mut duel = Self::standard(camera_width, seed);
        duel.left = duel.left.with_noise(jitter_px, dropout);
        duel.right = duel.right.with_noise(jitter_px, dropout);
        duel
    }

    /// Unlabeled observations for time `t`, in model order (right archer first).
    pub fn frame(&mut self, t: f64) -> Vec<PoseObservation> {
        vec![
            self.right.observe(t, &mut self.rng),
            self.left.observe(t, &mut self.rng),
        ]
    }
}

/// Aim angle that sends `side`'s shot up at `elevation` radians above horizontal.
pub fn aim_for_elevation(side: Side, elevation: f64) -> f64 {
    match side {
        Side::Left => -(PI - elevation),
        Side::Right => -elevation,
    }
}

/// True if `arena` matches the geometry `SyntheticDuel::standard` is tuned for.
pub fn is_standard_arena(arena: &Arena) -> bool {
    *arena == Arena::default()
}
