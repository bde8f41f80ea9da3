use std::f32::consts::FRAC_PI_2;
use glam::Vec3;
use super::*;

#[test]
fn test_camera_config_values() {
    let config = build_camera_config();

    assert_eq!(config.position, Vec3::new(10.0, 10.0, 10.0));
    assert_eq!(config.target, Vec3::new(3.0, 0.0, 3.0));
    assert_eq!(config.min_distance, 8.0);
    assert_eq!(config.max_distance, 64.0);
    assert_eq!(config.max_polar_angle, FRAC_PI_2 - 0.1);
    assert!(config.auto_rotate);
    assert_eq!(config.auto_rotate_speed, 5.0);
    assert!(config.enable_damping);
}

#[test]
fn test_camera_config_lens() {
    let config = build_camera_config();
    assert_eq!(config.fov_y_degrees, 75.0);
    assert_eq!(config.near, 0.1);
    assert_eq!(config.far, 1000.0);
}

#[test]
fn test_camera_config_is_idempotent() {
    assert_eq!(build_camera_config(), build_camera_config());
}

#[test]
fn test_initial_pose_within_limits() {
    let config = build_camera_config();
    // |(7, 10, 7)| = sqrt(198)
    assert!((config.distance() - 198f32.sqrt()).abs() < 1e-5);
    assert!(config.polar_angle() < config.max_polar_angle);
    assert!(config.is_within_limits());
}

#[test]
fn test_pose_outside_limits() {
    let mut too_close = build_camera_config();
    too_close.position = too_close.target + Vec3::new(1.0, 1.0, 1.0);
    assert!(!too_close.is_within_limits());

    let mut below_horizon = build_camera_config();
    below_horizon.position = below_horizon.target + Vec3::new(20.0, -1.0, 0.0);
    assert!(below_horizon.polar_angle() > FRAC_PI_2);
    assert!(!below_horizon.is_within_limits());
}

#[test]
fn test_polar_angle_straight_up() {
    let mut config = build_camera_config();
    config.position = config.target + Vec3::new(0.0, 12.0, 0.0);
    assert_eq!(config.polar_angle(), 0.0);
}
