//! Pose observations and interpreted actor state.
//!
//! Observations come from an external pose-estimation model and are
//! immutable per frame. `ActorPose` is the interpreter's per-player state.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::PowerStateKind;

/// COCO body landmarks, in model output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl Joint {
    /// All joints in COCO index order.
    pub const ALL: [Joint; 17] = [
        Joint::Nose,
        Joint::LeftEye,
        Joint::RightEye,
        Joint::LeftEar,
        Joint::RightEar,
        Joint::LeftShoulder,
        Joint::RightShoulder,
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftWrist,
        Joint::RightWrist,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftKnee,
        Joint::RightKnee,
        Joint::LeftAnkle,
        Joint::RightAnkle,
    ];

    /// Keypoint name as emitted by the pose model.
    pub fn as_str(self) -> &'static str {
        match self {
            Joint::Nose => "nose",
            Joint::LeftEye => "left_eye",
            Joint::RightEye => "right_eye",
            Joint::LeftEar => "left_ear",
            Joint::RightEar => "right_ear",
            Joint::LeftShoulder => "left_shoulder",
            Joint::RightShoulder => "right_shoulder",
            Joint::LeftElbow => "left_elbow",
            Joint::RightElbow => "right_elbow",
            Joint::LeftWrist => "left_wrist",
            Joint::RightWrist => "right_wrist",
            Joint::LeftHip => "left_hip",
            Joint::RightHip => "right_hip",
            Joint::LeftKnee => "left_knee",
            Joint::RightKnee => "right_knee",
            Joint::LeftAnkle => "left_ankle",
            Joint::RightAnkle => "right_ankle",
        }
    }

    /// Position of this joint in an unnamed COCO keypoint array.
    pub fn coco_index(self) -> usize {
        self as usize
    }
}

/// A single detected landmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
    /// Detection confidence in [0, 1]. `None` means the model gave no score.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Keypoint {
    pub fn new(x: f64, y: f64, score: f64) -> Self {
        Self {
            x,
            y,
            score: Some(score),
            name: None,
        }
    }

    /// Named keypoint, as produced by models that label their output.
    pub fn named(joint: Joint, x: f64, y: f64, score: f64) -> Self {
        Self {
            x,
            y,
            score: Some(score),
            name: Some(joint.as_str().to_string()),
        }
    }

    pub fn point(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// True if the keypoint has a score strictly above `threshold`.
    pub fn is_confident(&self, threshold: f64) -> bool {
        self.score.is_some_and(|s| s > threshold)
    }
}

/// All keypoints detected for one subject in one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseObservation {
    pub keypoints: Vec<Keypoint>,
    /// Overall pose confidence, when the model reports one.
    #[serde(default)]
    pub score: Option<f64>,
}

impl PoseObservation {
    pub fn new(keypoints: Vec<Keypoint>) -> Self {
        Self {
            keypoints,
            score: None,
        }
    }

    /// An observation with no keypoints: the subject was not seen this frame.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    /// Find a joint by name. Observations without any names are treated as
    /// COCO-ordered arrays and looked up by index instead.
    pub fn find(&self, joint: Joint) -> Option<&Keypoint> {
        let named = self.keypoints.iter().any(|kp| kp.name.is_some());
        if named {
            self.keypoints
                .iter()
                .find(|kp| kp.name.as_deref() == Some(joint.as_str()))
        } else {
            self.keypoints.get(joint.coco_index())
        }
    }

    /// Mean x of all keypoints, or `None` for an empty observation.
    pub fn mean_x(&self) -> Option<f64> {
        if self.keypoints.is_empty() {
            return None;
        }
        let sum: f64 = self.keypoints.iter().map(|kp| kp.x).sum();
        Some(sum / self.keypoints.len() as f64)
    }
}

/// Last reliable keypoint for each interpretation role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleKeypoints {
    /// Shoulder of the aiming arm.
    pub active_shoulder: Option<Keypoint>,
    /// Wrist of the aiming arm.
    pub active_wrist: Option<Keypoint>,
    /// Wrist of the drawing arm.
    pub power_wrist: Option<Keypoint>,
    /// Opposite shoulder, the width reference.
    pub other_shoulder: Option<Keypoint>,
}

/// Power state machine value of one actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PowerState {
    /// Not drawing.
    #[default]
    AtEase,
    /// Drawing or holding. `hold_power`/`hold_timestamp_ms` mark the current hold baseline.
    Setting {
        power: f64,
        hold_power: f64,
        hold_timestamp_ms: f64,
    },
    /// One-tick pulse: the hold was long enough and the shot is committed.
    Firing { power: f64 },
}

impl PowerState {
    pub fn kind(&self) -> PowerStateKind {
        match self {
            PowerState::AtEase => PowerStateKind::AtEase,
            PowerState::Setting { .. } => PowerStateKind::Setting,
            PowerState::Firing { .. } => PowerStateKind::Firing,
        }
    }

    /// Current numeric power (0 when at ease).
    pub fn power(&self) -> f64 {
        match *self {
            PowerState::AtEase => 0.0,
            PowerState::Setting { power, .. } | PowerState::Firing { power } => power,
        }
    }
}

/// Interpreted state of one actor: aim, power state, and the keypoints it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorPose {
    /// Smoothed aim angle (radians, canvas convention).
    pub angle: f64,
    pub power_state: PowerState,
    pub keypoints: RoleKeypoints,
}

impl ActorPose {
    pub fn new(angle: f64, power_state: PowerState, keypoints: RoleKeypoints) -> Self {
        Self {
            angle,
            power_state,
            keypoints,
        }
    }

    /// Fresh state: angle 0, at ease, no remembered keypoints.
    pub fn at_ease() -> Self {
        Self::default()
    }

    /// The committed shot power if this pose is the firing pulse.
    pub fn firing_power(&self) -> Option<f64> {
        match self.power_state {
            PowerState::Firing { power } => Some(power),
            _ => None,
        }
    }
}
