/// Fixed scene decoration: axis lines, orientation disk, and point lights.
///
/// None of these depend on the data; every builder returns the same value on
/// every call.

use glam::Vec3;
use super::color::Color;
use super::primitive::{Axis, AxisLineSpec, DiskSpec, LightSpec};

/// Shared origin of the three axis lines
pub const AXIS_ORIGIN: Vec3 = Vec3::new(-1.0, 0.0, -1.0);

pub const AXIS_COLOR: Color = Color(0x0000ff);

pub const DISK_RADIUS: f32 = 7.0;
pub const DISK_SEGMENTS: u32 = 64;
pub const DISK_COLOR: Color = Color(0xdee2e6);

pub const LIGHT_INTENSITY: f32 = 1.0;
pub const LIGHT_RANGE: f32 = 500.0;

/// Axis lines in Y, X, Z order
pub fn build_axis_lines() -> [AxisLineSpec; 3] {
    let line = |axis, end| AxisLineSpec {
        axis,
        start: AXIS_ORIGIN,
        end,
        color: AXIS_COLOR,
    };

    [
        line(Axis::Y, Vec3::new(-1.0, 6.0, -1.0)),
        line(Axis::X, Vec3::new(8.0, 0.0, -1.0)),
        line(Axis::Z, Vec3::new(-1.0, 0.0, 8.0)),
    ]
}

/// Disk centered under the grid, facing straight up
pub fn build_disk() -> DiskSpec {
    DiskSpec {
        radius: DISK_RADIUS,
        segments: DISK_SEGMENTS,
        position: Vec3::new(3.0, 0.0, 3.0),
        look_at: Vec3::new(3.0, 3.0, 3.0),
        color: DISK_COLOR,
    }
}

/// Two white point lights on opposite sides of the grid
pub fn build_lights() -> [LightSpec; 2] {
    let light = |position| LightSpec {
        position,
        color: Color::WHITE,
        intensity: LIGHT_INTENSITY,
        range: LIGHT_RANGE,
    };

    [
        light(Vec3::new(25.0, 10.0, 25.0)),
        light(Vec3::new(-25.0, 10.0, -25.0)),
    ]
}

#[cfg(test)]
#[path = "decor_tests.rs"]
mod tests;
