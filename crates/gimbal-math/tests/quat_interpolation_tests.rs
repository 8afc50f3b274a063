// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use gimbal_math::{Quat, Vec3};

fn quarter_turn_yaw() -> Quat {
    Quat::from_axis_angle(Vec3::UP, FRAC_PI_2)
}

#[test]
fn slerp_hits_both_endpoints() {
    let a = Quat::euler(10.0, 20.0, 30.0);
    let b = Quat::euler(-40.0, 5.0, 80.0);
    assert_eq!(a.slerp(&b, 0.0), a);
    assert_eq!(a.slerp(&b, 1.0), b);
}

#[test]
fn slerp_between_identical_rotations_is_stable() {
    let a = Quat::euler(12.0, -7.0, 45.0);
    for t in [0.0, 0.3, 0.7, 1.0] {
        let s = a.slerp(&a, t);
        assert!(s.to_array().iter().all(|c| c.is_finite()));
        assert_eq!(s, a);
    }
}

#[test]
fn slerp_midpoint_is_half_angle() {
    let mid = Quat::IDENTITY.slerp(&quarter_turn_yaw(), 0.5);
    assert_eq!(mid, Quat::from_axis_angle(Vec3::UP, FRAC_PI_4));
}

#[test]
fn slerp_clamps_but_unclamped_extrapolates() {
    let b = quarter_turn_yaw();
    assert_eq!(Quat::IDENTITY.slerp(&b, 2.0), b);
    assert_eq!(Quat::IDENTITY.slerp(&b, -1.0), Quat::IDENTITY);
    let overshoot = Quat::IDENTITY.slerp_unclamped(&b, 2.0);
    assert_eq!(overshoot, Quat::from_axis_angle(Vec3::UP, PI));
}

#[test]
fn slerp_near_parallel_falls_back_to_lerp() {
    let a = Quat::IDENTITY;
    let b = Quat::from_axis_angle(Vec3::UP, 1e-4);
    let s = a.slerp(&b, 0.5);
    assert!(s.to_array().iter().all(|c| c.is_finite()));
    assert!((s.length() - 1.0).abs() < 1e-6);
    assert_eq!(s, a);
}

#[test]
fn slerp_output_is_unit_length() {
    let a = Quat::euler(0.0, 60.0, 0.0);
    let b = Quat::euler(45.0, -30.0, 120.0);
    for i in 0..=10 {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f32 / 10.0;
        assert!((a.slerp(&b, t).length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn lerp_midpoint_matches_slerp_midpoint() {
    let b = quarter_turn_yaw();
    let lerp = Quat::IDENTITY.lerp(&b, 0.5);
    assert_eq!(lerp, Quat::IDENTITY.slerp(&b, 0.5));
    assert!((lerp.length() - 1.0).abs() < 1e-6);
}

#[test]
fn lerp_clamps_t() {
    let b = quarter_turn_yaw();
    assert_eq!(Quat::IDENTITY.lerp(&b, 3.0), b);
    assert_eq!(Quat::IDENTITY.lerp(&b, -3.0), Quat::IDENTITY);
}

#[test]
fn angle_between_rotations_in_degrees() {
    assert!((Quat::IDENTITY.angle(&quarter_turn_yaw()) - 90.0).abs() < 1e-3);
    assert_eq!(quarter_turn_yaw().angle(&quarter_turn_yaw()), 0.0);
    // Sign of the quaternion does not matter.
    let q = Quat::euler(0.0, 0.0, 60.0);
    let neg = Quat::new(-q.x(), -q.y(), -q.z(), -q.w());
    assert!((Quat::IDENTITY.angle(&neg) - 60.0).abs() < 1e-3);
}

#[test]
fn rotate_towards_steps_by_at_most_delta() {
    let target = quarter_turn_yaw();
    let step = Quat::IDENTITY.rotate_towards(&target, 30.0);
    assert!((Quat::IDENTITY.angle(&step) - 30.0).abs() < 1e-2);
    assert!((step.angle(&target) - 60.0).abs() < 1e-2);
    // A large delta lands exactly on the target.
    assert_eq!(Quat::IDENTITY.rotate_towards(&target, 120.0), target);
}

#[test]
fn rotate_towards_equal_returns_target() {
    let q = Quat::euler(5.0, 6.0, 7.0);
    assert_eq!(q.rotate_towards(&q, 10.0).to_array(), q.to_array());
}

fn negated(q: Quat) -> Quat {
    Quat::new(-q.x(), -q.y(), -q.z(), -q.w())
}

#[test]
fn slerp_takes_short_arc_to_negated_target() {
    let target = negated(quarter_turn_yaw());
    let mid = Quat::IDENTITY.slerp(&target, 0.5);
    assert!((Quat::IDENTITY.angle(&mid) - 45.0).abs() < 1e-2);
    assert!((mid.angle(&target) - 45.0).abs() < 1e-2);
    assert!(Quat::IDENTITY.slerp(&target, 1.0).angle(&target) < 1e-2);
}

#[test]
fn lerp_takes_short_arc_to_negated_target() {
    let target = negated(quarter_turn_yaw());
    let mid = Quat::IDENTITY.lerp(&target, 0.5);
    assert!((Quat::IDENTITY.angle(&mid) - 45.0).abs() < 1e-2);
    assert!((mid.length() - 1.0).abs() < 1e-6);
}

#[test]
fn slerp_between_opposite_signs_stays_put() {
    let q = Quat::euler(20.0, -35.0, 70.0);
    let neg = negated(q);
    for t in [0.0, 0.25, 0.5, 1.0] {
        let s = q.slerp(&neg, t);
        assert!(s.to_array().iter().all(|c| c.is_finite()));
        assert_eq!(s, q);
    }
}

#[test]
fn rotate_towards_negated_target_closes_the_gap() {
    let target = negated(quarter_turn_yaw());
    let step = Quat::IDENTITY.rotate_towards(&target, 30.0);
    assert!((Quat::IDENTITY.angle(&step) - 30.0).abs() < 1e-2);
    assert!((step.angle(&target) - 60.0).abs() < 1e-2);
    let landed = Quat::IDENTITY.rotate_towards(&target, 120.0);
    assert!(landed.angle(&target) < 1e-2);
}

#[test]
fn look_rotation_turns_forward_onto_direction() {
    // upwards - forward = +X
    let q = Quat::look_rotation(Vec3::ZERO, Vec3::RIGHT);
    assert_eq!(q * Vec3::FORWARD, Vec3::RIGHT);
    // upwards - forward = +Y (doubled, then normalized)
    let q = Quat::look_rotation(Vec3::DOWN, Vec3::UP);
    assert_eq!(q * Vec3::FORWARD, Vec3::UP);
}

#[test]
fn look_rotation_already_forward_is_identity() {
    let q = Quat::look_rotation(Vec3::ZERO, Vec3::FORWARD);
    assert_eq!(q, Quat::IDENTITY);
}

#[test]
fn look_rotation_forward_defaults_upwards() {
    let v = Vec3::new(0.5, -2.0, 1.0);
    assert_eq!(Quat::look_rotation_forward(v), Quat::look_rotation(v, Vec3::UP));
}
