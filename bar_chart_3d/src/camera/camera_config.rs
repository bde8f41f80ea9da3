/// CameraConfig - static orbit camera configuration.
///
/// Describes the initial pose, lens, and the limits/behaviour an external
/// orbit controller applies (auto-rotation, damping, zoom and polar bounds).
/// The controller itself lives in the render host.

use std::f32::consts::FRAC_PI_2;
use glam::Vec3;
use serde::Serialize;

/// Orbit camera configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraConfig {
    /// Initial eye position
    pub position: Vec3,
    /// Orbit center
    pub target: Vec3,

    /// Vertical field of view, in degrees
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,

    /// Closest allowed eye-to-target distance
    pub min_distance: f32,
    /// Farthest allowed eye-to-target distance
    pub max_distance: f32,
    /// Largest angle from +Y, in radians (keeps the eye above the ground)
    pub max_polar_angle: f32,

    pub auto_rotate: bool,
    /// Auto-rotation speed in controller units (30 s per orbit at 2.0)
    pub auto_rotate_speed: f32,
    pub enable_damping: bool,
}

/// The chart's camera configuration
pub fn build_camera_config() -> CameraConfig {
    CameraConfig {
        position: Vec3::new(10.0, 10.0, 10.0),
        target: Vec3::new(3.0, 0.0, 3.0),
        fov_y_degrees: 75.0,
        near: 0.1,
        far: 1000.0,
        min_distance: 8.0,
        max_distance: 64.0,
        max_polar_angle: FRAC_PI_2 - 0.1,
        auto_rotate: true,
        auto_rotate_speed: 5.0,
        enable_damping: true,
    }
}

impl CameraConfig {
    /// Eye-to-target distance of the initial pose
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Angle between +Y and the target-to-eye direction, in radians
    pub fn polar_angle(&self) -> f32 {
        let offset = self.position - self.target;
        let length = offset.length();
        if length == 0.0 {
            return 0.0;
        }
        (offset.y / length).clamp(-1.0, 1.0).acos()
    }

    /// True when the initial pose respects the distance and polar limits
    pub fn is_within_limits(&self) -> bool {
        let distance = self.distance();
        distance >= self.min_distance
            && distance <= self.max_distance
            && self.polar_angle() <= self.max_polar_angle
    }
}

#[cfg(test)]
#[path = "camera_config_tests.rs"]
mod tests;
