//! Side-dependent mapping from anatomical joints to interpretation roles.
//!
//! Each player aims with one arm and draws with the other, like a bow.
//! The mapping is mirrored between the sides.

use artillery_core::enums::Side;
use artillery_core::pose::Joint;

/// Which joint plays which role for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleMap {
    pub active_shoulder: Joint,
    pub active_wrist: Joint,
    pub power_wrist: Joint,
    pub other_shoulder: Joint,
}

impl RoleMap {
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => RoleMap {
                active_shoulder: Joint::RightShoulder,
                active_wrist: Joint::RightWrist,
                power_wrist: Joint::LeftWrist,
                other_shoulder: Joint::LeftShoulder,
            },
            Side::Right => RoleMap {
                active_shoulder: Joint::LeftShoulder,
                active_wrist: Joint::LeftWrist,
                power_wrist: Joint::RightWrist,
                other_shoulder: Joint::RightShoulder,
            },
        }
    }
}
