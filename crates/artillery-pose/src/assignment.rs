//! Routing of per-frame pose observations to the two sides.
//!
//! The pose model returns up to two subjects in no particular order.
//! Camera frames are not mirrored, so a subject standing on the image's
//! right half is physically on the left and drives the left tank.

use artillery_core::constants::{MAX_SUBJECTS, SIDE_SHOULDER_CONFIDENCE};
use artillery_core::enums::Side;
use artillery_core::pose::{Joint, PoseObservation};

/// Observations routed to each side for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidedFrames<'a> {
    pub left: Option<&'a PoseObservation>,
    pub right: Option<&'a PoseObservation>,
}

impl<'a> SidedFrames<'a> {
    pub fn get(&self, side: Side) -> Option<&'a PoseObservation> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn slot(&mut self, side: Side) -> &mut Option<&'a PoseObservation> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Horizontal center of a subject: the shoulder midpoint when both
/// shoulders are confident, otherwise the mean x of all keypoints.
pub fn horizontal_center(pose: &PoseObservation) -> Option<f64> {
    if let (Some(left), Some(right)) = (
        pose.find(Joint::LeftShoulder),
        pose.find(Joint::RightShoulder),
    ) {
        if left.is_confident(SIDE_SHOULDER_CONFIDENCE)
            && right.is_confident(SIDE_SHOULDER_CONFIDENCE)
        {
            return Some((left.x + right.x) / 2.0);
        }
    }
    pose.mean_x()
}

/// Observations ordered left to right in image space. Empty ones are dropped.
pub fn sort_poses(poses: &[PoseObservation]) -> Vec<&PoseObservation> {
    let mut centered: Vec<(f64, &PoseObservation)> = poses
        .iter()
        .filter_map(|pose| horizontal_center(pose).map(|x| (x, pose)))
        .collect();
    centered.sort_by(|a, b| a.0.total_cmp(&b.0));
    centered.into_iter().map(|(_, pose)| pose).collect()
}

/// Side a subject centered at `center_x` controls.
pub fn side_for(center_x: f64, divider_x: f64) -> Side {
    if center_x > divider_x {
        Side::Left
    } else {
        Side::Right
    }
}

/// Route observations to sides. Only the first `MAX_SUBJECTS` observations,
/// in model order, are considered. At most one observation per side: when two
/// subjects fall on the same half, the first in image order keeps the slot.
pub fn assign_sides(poses: &[PoseObservation], divider_x: f64) -> SidedFrames<'_> {
    let considered = &poses[..poses.len().min(MAX_SUBJECTS)];
    let mut frames = SidedFrames::default();
    for pose in sort_poses(considered) {
        let Some(center) = horizontal_center(pose) else {
            continue;
        };
        let slot = frames.slot(side_for(center, divider_x));
        if slot.is_none() {
            *slot = Some(pose);
        }
    }
    frames
}
