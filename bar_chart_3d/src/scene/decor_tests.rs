use glam::Vec3;
use super::*;

// ============================================================================
// Axis lines
// ============================================================================

#[test]
fn test_axis_lines_share_origin() {
    for line in build_axis_lines() {
        assert_eq!(line.start, Vec3::new(-1.0, 0.0, -1.0));
        assert_eq!(line.color, Color(0x0000ff));
    }
}

#[test]
fn test_axis_lines_endpoints_in_y_x_z_order() {
    let lines = build_axis_lines();

    assert_eq!(lines[0].axis, Axis::Y);
    assert_eq!(lines[0].end, Vec3::new(-1.0, 6.0, -1.0));
    assert_eq!(lines[1].axis, Axis::X);
    assert_eq!(lines[1].end, Vec3::new(8.0, 0.0, -1.0));
    assert_eq!(lines[2].axis, Axis::Z);
    assert_eq!(lines[2].end, Vec3::new(-1.0, 0.0, 8.0));
}

#[test]
fn test_axis_lines_point_along_their_axis() {
    for line in build_axis_lines() {
        let dir = (line.end - line.start).normalize();
        let expected = match line.axis {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        };
        assert!(dir.abs_diff_eq(expected, 1e-6));
    }
}

// ============================================================================
// Disk
// ============================================================================

#[test]
fn test_disk_parameters() {
    let disk = build_disk();
    assert_eq!(disk.radius, 7.0);
    assert_eq!(disk.segments, 64);
    assert_eq!(disk.position, Vec3::new(3.0, 0.0, 3.0));
    assert_eq!(disk.look_at, Vec3::new(3.0, 3.0, 3.0));
    assert_eq!(disk.color, Color(0xdee2e6));
}

#[test]
fn test_disk_faces_up() {
    assert_eq!(build_disk().normal(), Vec3::Y);
}

// ============================================================================
// Lights
// ============================================================================

#[test]
fn test_lights_positions_and_strength() {
    let lights = build_lights();
    assert_eq!(lights[0].position, Vec3::new(25.0, 10.0, 25.0));
    assert_eq!(lights[1].position, Vec3::new(-25.0, 10.0, -25.0));
    for light in lights {
        assert_eq!(light.color, Color::WHITE);
        assert_eq!(light.intensity, 1.0);
        assert_eq!(light.range, 500.0);
    }
}

#[test]
fn test_light_attenuation_is_linear_in_range() {
    let light = build_lights()[0];
    assert_eq!(light.attenuation(light.position), 1.0);
    assert_eq!(light.attenuation(light.position + Vec3::new(250.0, 0.0, 0.0)), 0.5);
    assert_eq!(light.attenuation(light.position + Vec3::new(0.0, 900.0, 0.0)), 0.0);
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_builders_are_idempotent() {
    assert_eq!(build_axis_lines(), build_axis_lines());
    assert_eq!(build_disk(), build_disk());
    assert_eq!(build_lights(), build_lights());
}
