//! Actor pose interpreter: reliability filter, smoothing, and the
//! at-ease / setting / firing power state machine.
//!
//! Pure functions on plain data. The caller supplies the timestamp, so the
//! same inputs always produce the same output.

use tracing::debug;

use artillery_core::constants::*;
use artillery_core::enums::Side;
use artillery_core::pose::{
    ActorPose, Joint, Keypoint, PoseObservation, PowerState, RoleKeypoints,
};

use crate::roles::RoleMap;

/// Interpret one frame for one actor.
///
/// Returns `previous` unchanged when any role has never been observed
/// reliably, or when the shoulders coincide. A `Firing` result is a
/// one-tick pulse; the caller must reset the actor before the next tick.
pub fn interpret(
    frame: &PoseObservation,
    previous: &ActorPose,
    side: Side,
    now_ms: f64,
) -> ActorPose {
    let roles = RoleMap::for_side(side);
    let last = &previous.keypoints;

    let keypoints = RoleKeypoints {
        active_shoulder: reliable(frame, roles.active_shoulder, &last.active_shoulder),
        active_wrist: reliable(frame, roles.active_wrist, &last.active_wrist),
        power_wrist: reliable(frame, roles.power_wrist, &last.power_wrist),
        other_shoulder: reliable(frame, roles.other_shoulder, &last.other_shoulder),
    };

    let (Some(active_shoulder), Some(active_wrist), Some(power_wrist), Some(other_shoulder)) = (
        keypoints.active_shoulder.as_ref(),
        keypoints.active_wrist.as_ref(),
        keypoints.power_wrist.as_ref(),
        keypoints.other_shoulder.as_ref(),
    ) else {
        return previous.clone();
    };

    let shoulder = active_shoulder.point();
    let aim = active_wrist.point() - shoulder;
    let raw_angle = aim.y.atan2(aim.x);
    let angle = smooth(raw_angle, previous.angle);

    let shoulder_width = shoulder.distance(other_shoulder.point());
    if !(shoulder_width.is_finite() && shoulder_width > 0.0) {
        return previous.clone();
    }
    let raw_power = power_wrist.point().distance(shoulder) / shoulder_width;
    let power = match previous.power_state {
        PowerState::Setting { power, .. } => smooth(raw_power, power),
        _ => raw_power,
    };

    let power_state = next_power_state(&previous.power_state, power, now_ms);
    log_transition(side, &previous.power_state, &power_state);

    ActorPose::new(angle, power_state, keypoints)
}

/// First-order low-pass filter with the shared smoothing factor.
pub fn smooth(sample: f64, previous: f64) -> f64 {
    SMOOTHING_FACTOR * sample + (1.0 - SMOOTHING_FACTOR) * previous
}

/// Advance the power state machine given this tick's smoothed power.
pub fn next_power_state(previous: &PowerState, power: f64, now_ms: f64) -> PowerState {
    match *previous {
        PowerState::AtEase if power < SETTING_ENTRY_POWER => PowerState::Setting {
            power,
            hold_power: power,
            hold_timestamp_ms: now_ms,
        },
        PowerState::Setting {
            hold_power,
            hold_timestamp_ms,
            ..
        } => {
            if power - hold_power > REDRAW_POWER_DELTA {
                // Still drawing back: restart the hold at the new baseline.
                PowerState::Setting {
                    power,
                    hold_power: power,
                    hold_timestamp_ms: now_ms,
                }
            } else if now_ms - hold_timestamp_ms < HOLD_TO_FIRE_MS {
                PowerState::Setting {
                    power,
                    hold_power,
                    hold_timestamp_ms,
                }
            } else {
                PowerState::Firing { power }
            }
        }
        // At ease above the entry threshold, or a firing pulse the caller never reset.
        _ => PowerState::AtEase,
    }
}

/// Current keypoint if confident enough, otherwise the remembered one.
fn reliable(frame: &PoseObservation, joint: Joint, last: &Option<Keypoint>) -> Option<Keypoint> {
    match frame.find(joint) {
        Some(kp) if kp.is_confident(CONFIDENCE_THRESHOLD) => Some(kp.clone()),
        _ => last.clone(),
    }
}

fn log_transition(side: Side, from: &PowerState, to: &PowerState) {
    match (from, to) {
        (PowerState::AtEase, PowerState::Setting { power, .. }) => {
            debug!(%side, power, "Draw started");
        }
        (
            PowerState::Setting { hold_power, .. },
            PowerState::Setting {
                hold_power: new_hold,
                ..
            },
        ) if hold_power != new_hold => {
            debug!(%side, hold_power = new_hold, "Hold restarted at higher draw");
        }
        (_, PowerState::Firing { power }) => {
            debug!(%side, power, "Hold committed");
        }
        _ => {}
    }
}
