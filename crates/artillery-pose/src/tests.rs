#[cfg(test)]
mod tests {
    use artillery_core::constants::*;
    use artillery_core::enums::{PowerStateKind, Side};
    use artillery_core::pose::{ActorPose, Joint, Keypoint, PoseObservation, PowerState};

    use crate::assignment::{assign_sides, horizontal_center, side_for, sort_poses};
    use crate::fsm::{interpret, next_power_state, smooth};
    use crate::roles::RoleMap;

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const EPS: f64 = 1e-9;

    type Pt = (f64, f64);

    /// Build a named frame placing the roles of `side` at the given points.
    fn role_frame(
        side: Side,
        active_shoulder: Pt,
        active_wrist: Pt,
        power_wrist: Pt,
        other_shoulder: Pt,
        score: f64,
    ) -> PoseObservation {
        let roles = RoleMap::for_side(side);
        PoseObservation::new(vec![
            Keypoint::named(roles.active_shoulder, active_shoulder.0, active_shoulder.1, score),
            Keypoint::named(roles.active_wrist, active_wrist.0, active_wrist.1, score),
            Keypoint::named(roles.power_wrist, power_wrist.0, power_wrist.1, score),
            Keypoint::named(roles.other_shoulder, other_shoulder.0, other_shoulder.1, score),
        ])
    }

    /// Confident frame with shoulder width 100 whose raw angle is `angle`
    /// and raw power is `power`.
    fn gesture(side: Side, angle: f64, power: f64) -> PoseObservation {
        role_frame(
            side,
            (200.0, 100.0),
            (200.0 + 80.0 * angle.cos(), 100.0 + 80.0 * angle.sin()),
            (200.0, 100.0 + power * 100.0),
            (300.0, 100.0),
            0.9,
        )
    }

    fn setting(power: f64, hold_power: f64, hold_timestamp_ms: f64) -> PowerState {
        PowerState::Setting {
            power,
            hold_power,
            hold_timestamp_ms,
        }
    }

    // ---- Reliability filter ----

    #[test]
    fn test_never_observed_role_is_noop() {
        let previous = ActorPose::at_ease();
        let mut frame = gesture(Side::Left, 0.5, 0.5);
        frame
            .keypoints
            .retain(|kp| kp.name.as_deref() != Some(Joint::LeftWrist.as_str()));

        let result = interpret(&frame, &previous, Side::Left, 0.0);
        assert_eq!(result, previous);

        let empty = interpret(&PoseObservation::empty(), &previous, Side::Right, 0.0);
        assert_eq!(empty, previous);
    }

    #[test]
    fn test_noop_preserves_setting_state() {
        let previous = ActorPose::new(0.7, setting(0.05, 0.05, 100.0), Default::default());
        let result = interpret(&PoseObservation::empty(), &previous, Side::Left, 9_000.0);
        assert_eq!(result, previous);
    }

    #[test]
    fn test_low_confidence_falls_back_to_remembered_keypoints() {
        let first = interpret(&gesture(Side::Left, 0.5, 0.5), &ActorPose::at_ease(), Side::Left, 0.0);

        // Same roles, moved, but at exactly the threshold: not strictly above it.
        let shaky = role_frame(
            Side::Left,
            (0.0, 0.0),
            (10.0, 10.0),
            (20.0, 20.0),
            (30.0, 30.0),
            CONFIDENCE_THRESHOLD,
        );
        let second = interpret(&shaky, &first, Side::Left, FRAME_MS);
        assert_eq!(second.keypoints, first.keypoints);
    }

    #[test]
    fn test_missing_score_falls_back() {
        let first = interpret(&gesture(Side::Right, 0.2, 0.5), &ActorPose::at_ease(), Side::Right, 0.0);
        let mut unscored = gesture(Side::Right, 1.2, 0.9);
        for kp in &mut unscored.keypoints {
            kp.score = None;
        }
        let second = interpret(&unscored, &first, Side::Right, FRAME_MS);
        assert_eq!(second.keypoints, first.keypoints);
    }

    #[test]
    fn test_fallback_is_per_role() {
        let first = interpret(&gesture(Side::Left, 0.0, 0.5), &ActorPose::at_ease(), Side::Left, 0.0);
        let mut frame = gesture(Side::Left, 1.0, 0.5);
        for kp in &mut frame.keypoints {
            if kp.name.as_deref() == Some(Joint::RightWrist.as_str()) {
                kp.score = Some(0.2);
            }
        }
        let second = interpret(&frame, &first, Side::Left, FRAME_MS);
        // The aim wrist is stale, everything else is fresh.
        assert_eq!(second.keypoints.active_wrist, first.keypoints.active_wrist);
        assert_eq!(second.keypoints.power_wrist, first.keypoints.power_wrist);
        let fresh_wrist = frame.find(Joint::RightWrist).unwrap();
        assert_ne!(second.keypoints.active_wrist.as_ref(), Some(fresh_wrist));
    }

    #[test]
    fn test_remembered_keypoints_carry_through_empty_frames() {
        let first = interpret(&gesture(Side::Left, 1.0, 0.5), &ActorPose::at_ease(), Side::Left, 0.0);
        let second = interpret(&PoseObservation::empty(), &first, Side::Left, FRAME_MS);
        assert_eq!(second.keypoints, first.keypoints);
        // Angle keeps converging on the remembered aim.
        assert!((second.angle - smooth(1.0, first.angle)).abs() < EPS);
    }

    #[test]
    fn test_coincident_shoulders_is_noop() {
        let frame = role_frame(
            Side::Left,
            (100.0, 100.0),
            (150.0, 50.0),
            (100.0, 100.0),
            (100.0, 100.0),
            0.9,
        );
        let previous = ActorPose::at_ease();
        assert_eq!(interpret(&frame, &previous, Side::Left, 0.0), previous);
    }

    // ---- Smoothing ----

    #[test]
    fn test_angle_smoothing_converges_geometrically() {
        let target = 1.0;
        let start = -0.5;
        let mut pose = ActorPose::new(start, PowerState::AtEase, Default::default());
        for n in 1..=20 {
            pose = interpret(&gesture(Side::Left, target, 0.5), &pose, Side::Left, n as f64 * FRAME_MS);
            let expected_error = (start - target) * (1.0 - SMOOTHING_FACTOR).powi(n);
            assert!(
                (pose.angle - target - expected_error).abs() < 1e-9,
                "tick {n}: angle {} expected error {expected_error}",
                pose.angle
            );
        }
    }

    #[test]
    fn test_power_is_raw_outside_setting() {
        let pose = interpret(&gesture(Side::Left, 0.0, 0.05), &ActorPose::at_ease(), Side::Left, 0.0);
        match pose.power_state {
            PowerState::Setting { power, .. } => assert!((power - 0.05).abs() < EPS),
            other => panic!("expected Setting, got {other:?}"),
        }
    }

    #[test]
    fn test_power_is_smoothed_while_setting() {
        let previous = ActorPose::new(0.0, setting(0.2, 0.2, 0.0), Default::default());
        let pose = interpret(&gesture(Side::Left, 0.0, 0.3), &previous, Side::Left, 100.0);
        let expected = 0.6 * 0.3 + 0.4 * 0.2;
        match pose.power_state {
            PowerState::Setting {
                power,
                hold_power,
                hold_timestamp_ms,
            } => {
                assert!((power - expected).abs() < EPS);
                assert_eq!(hold_power, 0.2);
                assert_eq!(hold_timestamp_ms, 0.0);
            }
            other => panic!("expected Setting, got {other:?}"),
        }
    }

    // ---- Power state machine ----

    #[test]
    fn test_at_ease_enters_setting_below_threshold() {
        let pose = interpret(&gesture(Side::Right, -0.4, 0.05), &ActorPose::at_ease(), Side::Right, 1234.0);
        match pose.power_state {
            PowerState::Setting {
                power,
                hold_power,
                hold_timestamp_ms,
            } => {
                assert!((power - 0.05).abs() < EPS);
                assert_eq!(power, hold_power);
                assert_eq!(hold_timestamp_ms, 1234.0);
            }
            other => panic!("expected Setting, got {other:?}"),
        }
        assert!((pose.angle - 0.6 * -0.4).abs() < EPS);
    }

    #[test]
    fn test_at_ease_above_threshold_only_updates_angle() {
        let pose = interpret(&gesture(Side::Left, 0.8, 0.5), &ActorPose::at_ease(), Side::Left, 0.0);
        assert_eq!(pose.power_state, PowerState::AtEase);
        assert!((pose.angle - 0.6 * 0.8).abs() < EPS);
        assert!(pose.keypoints.active_shoulder.is_some());
        assert!(pose.keypoints.power_wrist.is_some());
    }

    #[test]
    fn test_setting_entry_threshold_is_strict() {
        assert_eq!(
            next_power_state(&PowerState::AtEase, SETTING_ENTRY_POWER, 0.0),
            PowerState::AtEase
        );
        assert_eq!(
            next_power_state(&PowerState::AtEase, 0.0999, 5.0).kind(),
            PowerStateKind::Setting
        );
    }

    #[test]
    fn test_hold_keeps_baseline_before_deadline() {
        let next = next_power_state(&setting(0.3, 0.3, 1000.0), 0.35, 1000.0 + HOLD_TO_FIRE_MS - 1.0);
        assert_eq!(next, setting(0.35, 0.3, 1000.0));
    }

    #[test]
    fn test_hold_fires_at_deadline() {
        let next = next_power_state(&setting(0.3, 0.3, 1000.0), 0.32, 1000.0 + HOLD_TO_FIRE_MS);
        assert_eq!(next, PowerState::Firing { power: 0.32 });
    }

    #[test]
    fn test_lower_draw_keeps_setting() {
        // Dropping well below the hold baseline is not special-cased.
        let next = next_power_state(&setting(0.6, 0.6, 0.0), 0.01, 10.0);
        assert_eq!(next, setting(0.01, 0.6, 0.0));
    }

    #[test]
    fn test_redraw_restarts_hold() {
        let previous = ActorPose::new(0.0, setting(0.45, 0.3, 0.0), Default::default());
        // Long past the hold deadline: the re-draw check wins over firing.
        let pose = interpret(&gesture(Side::Left, 0.0, 0.45), &previous, Side::Left, 10_000.0);
        match pose.power_state {
            PowerState::Setting {
                power,
                hold_power,
                hold_timestamp_ms,
            } => {
                assert!((power - 0.45).abs() < EPS);
                assert_eq!(hold_power, power);
                assert_eq!(hold_timestamp_ms, 10_000.0);
            }
            other => panic!("expected restarted Setting, got {other:?}"),
        }
    }

    #[test]
    fn test_hold_to_fire_scenario() {
        let mut pose = ActorPose::at_ease();
        let mut last_power = f64::NAN;
        let mut fired_at = None;

        for tick in 0..400u32 {
            let raw = if tick < 10 { 0.005 * tick as f64 } else { 0.05 };
            let now = tick as f64 * 1000.0 / 60.0;
            pose = interpret(&gesture(Side::Left, -2.0, raw), &pose, Side::Left, now);

            match pose.power_state {
                PowerState::Setting {
                    power,
                    hold_timestamp_ms,
                    ..
                } => {
                    assert_eq!(hold_timestamp_ms, 0.0, "hold restarted at tick {tick}");
                    last_power = power;
                }
                PowerState::Firing { power } => {
                    let expected = smooth(0.05, last_power);
                    assert!((power - expected).abs() < EPS);
                    fired_at = Some(tick);
                    break;
                }
                PowerState::AtEase => panic!("dropped to AtEase at tick {tick}"),
            }
        }

        // 180 ticks at 60Hz = 3000ms after the hold started on tick 0.
        assert_eq!(fired_at, Some(180));
    }

    #[test]
    fn test_unreset_firing_falls_back_to_at_ease() {
        let previous = ActorPose::new(1.0, PowerState::Firing { power: 0.5 }, Default::default());
        let pose = interpret(&gesture(Side::Right, 1.0, 0.05), &previous, Side::Right, 0.0);
        assert_eq!(pose.power_state, PowerState::AtEase);
        assert!((pose.angle - 1.0).abs() < EPS);
    }

    /// The Setting branch covers every input: it never falls through to AtEase.
    #[test]
    fn test_setting_branch_is_exhaustive() {
        let hold_powers = [0.0, 0.05, 0.3, 0.9, 1.4];
        let elapsed = [0.0, 16.7, 1500.0, 2999.999, 3000.0, 3000.001, 60_000.0];
        for &hold_power in &hold_powers {
            for step in 0..=30 {
                let power = step as f64 * 0.05;
                for &dt in &elapsed {
                    let next = next_power_state(&setting(hold_power, hold_power, 500.0), power, 500.0 + dt);
                    assert_ne!(
                        next.kind(),
                        PowerStateKind::AtEase,
                        "hold {hold_power} power {power} elapsed {dt}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_interpret_is_deterministic() {
        let frames: Vec<(PoseObservation, f64)> = (0..240)
            .map(|i| {
                let t = i as f64;
                let mut frame = gesture(Side::Right, (t * 0.05).sin(), 0.02 + 0.004 * (t * 0.1).cos());
                if i % 7 == 0 {
                    for kp in &mut frame.keypoints {
                        kp.score = Some(0.3);
                    }
                }
                (frame, t * FRAME_MS)
            })
            .collect();

        let run = || {
            let mut pose = ActorPose::at_ease();
            let mut history = Vec::new();
            for (frame, now) in &frames {
                pose = interpret(frame, &pose, Side::Right, *now);
                history.push(pose.clone());
            }
            history
        };

        assert_eq!(run(), run());
    }

    // ---- Roles ----

    #[test]
    fn test_role_map_is_mirrored() {
        let left = RoleMap::for_side(Side::Left);
        let right = RoleMap::for_side(Side::Right);
        assert_eq!(left.active_wrist, Joint::RightWrist);
        assert_eq!(left.power_wrist, Joint::LeftWrist);
        assert_eq!(right.active_wrist, Joint::LeftWrist);
        assert_eq!(right.power_wrist, Joint::RightWrist);
        assert_eq!(left.active_shoulder, right.other_shoulder);
        assert_eq!(left.other_shoulder, right.active_shoulder);
    }

    #[test]
    fn test_sides_read_opposite_arms() {
        let frame = PoseObservation::new(vec![
            Keypoint::named(Joint::RightShoulder, 100.0, 100.0, 0.9),
            Keypoint::named(Joint::RightWrist, 20.0, 100.0, 0.9),
            Keypoint::named(Joint::LeftShoulder, 200.0, 100.0, 0.9),
            Keypoint::named(Joint::LeftWrist, 280.0, 100.0, 0.9),
        ]);
        let left = interpret(&frame, &ActorPose::at_ease(), Side::Left, 0.0);
        let right = interpret(&frame, &ActorPose::at_ease(), Side::Right, 0.0);

        assert!((left.angle - SMOOTHING_FACTOR * std::f64::consts::PI).abs() < EPS);
        assert!(right.angle.abs() < EPS);
        assert_eq!(left.keypoints.active_wrist.unwrap().x, 20.0);
        assert_eq!(right.keypoints.active_wrist.unwrap().x, 280.0);
    }

    // ---- Side assignment ----

    fn subject_at(center_x: f64, shoulder_score: f64) -> PoseObservation {
        PoseObservation::new(vec![
            Keypoint::named(Joint::Nose, center_x + 200.0, 50.0, 0.9),
            Keypoint::named(Joint::LeftShoulder, center_x + 40.0, 100.0, shoulder_score),
            Keypoint::named(Joint::RightShoulder, center_x - 40.0, 100.0, shoulder_score),
        ])
    }

    #[test]
    fn test_horizontal_center_prefers_shoulders() {
        let confident = subject_at(300.0, 0.9);
        assert!((horizontal_center(&confident).unwrap() - 300.0).abs() < EPS);

        // Weak shoulders: mean of all keypoints, dragged by the nose.
        let weak = subject_at(300.0, 0.4);
        let expected = (500.0 + 340.0 + 260.0) / 3.0;
        assert!((horizontal_center(&weak).unwrap() - expected).abs() < EPS);

        assert_eq!(horizontal_center(&PoseObservation::empty()), None);
    }

    #[test]
    fn test_sort_poses_orders_by_center_and_drops_empty() {
        let poses = vec![subject_at(500.0, 0.9), PoseObservation::empty(), subject_at(100.0, 0.9)];
        let sorted = sort_poses(&poses);
        assert_eq!(sorted.len(), 2);
        assert!(std::ptr::eq(sorted[0], &poses[2]));
        assert!(std::ptr::eq(sorted[1], &poses[0]));
    }

    #[test]
    fn test_right_half_drives_left_tank() {
        assert_eq!(side_for(400.0, 320.0), Side::Left);
        assert_eq!(side_for(320.0, 320.0), Side::Right);

        let poses = vec![subject_at(100.0, 0.9), subject_at(500.0, 0.9)];
        let frames = assign_sides(&poses, 320.0);
        assert!(std::ptr::eq(frames.left.unwrap(), &poses[1]));
        assert!(std::ptr::eq(frames.right.unwrap(), &poses[0]));
        assert!(std::ptr::eq(frames.get(Side::Left).unwrap(), &poses[1]));
    }

    #[test]
    fn test_same_half_keeps_first_subject() {
        let poses = vec![subject_at(500.0, 0.9), subject_at(400.0, 0.9)];
        let frames = assign_sides(&poses, 320.0);
        assert!(std::ptr::eq(frames.left.unwrap(), &poses[1]));
        assert!(frames.right.is_none());
    }

    #[test]
    fn test_subjects_beyond_model_limit_are_ignored() {
        let poses = vec![subject_at(500.0, 0.9), subject_at(450.0, 0.9), subject_at(100.0, 0.9)];
        let frames = assign_sides(&poses, 320.0);
        assert!(std::ptr::eq(frames.left.unwrap(), &poses[1]));
        assert!(frames.right.is_none());
    }
}
