use glam::Vec3;
use crate::scene::build_lights;
use super::*;

fn overhead_light() -> LightSpec {
    LightSpec {
        position: Vec3::new(0.0, 10.0, 0.0),
        color: Color::WHITE,
        intensity: 1.0,
        range: 0.0,
    }
}

#[test]
fn test_material_constructors() {
    assert_eq!(Material::lambert(Color(0xff6b6b)).kind(), MaterialKind::Lambert);
    assert_eq!(Material::basic(Color(0xdee2e6)).kind(), MaterialKind::Basic);
    assert_eq!(Material::line_basic(Color(0x0000ff)).kind(), MaterialKind::LineBasic);
    assert!(Material::lambert(Color::WHITE).is_lit());
    assert!(!Material::basic(Color::WHITE).is_lit());
}

#[test]
fn test_unlit_material_ignores_lights() {
    let material = Material::basic(Color(0xdee2e6));
    let shaded = material.shade(Vec3::ZERO, Vec3::Y, &build_lights(), 0.0);
    assert_eq!(shaded, Color(0xdee2e6));
}

#[test]
fn test_lambert_facing_light_is_full_color() {
    let material = Material::lambert(Color(0x339af0));
    // range 0 disables attenuation
    let shaded = material.shade(Vec3::ZERO, Vec3::Y, &[overhead_light()], 0.0);
    assert_eq!(shaded, Color(0x339af0));
}

#[test]
fn test_lambert_facing_away_uses_ambient_only() {
    let material = Material::lambert(Color::WHITE);
    let dark = material.shade(Vec3::ZERO, Vec3::NEG_Y, &[overhead_light()], 0.0);
    assert_eq!(dark, Color(0x000000));

    let ambient = material.shade(Vec3::ZERO, Vec3::NEG_Y, &[overhead_light()], 0.5);
    assert_eq!(ambient, Color(0x808080));
}

#[test]
fn test_lambert_clamps_overexposure() {
    let material = Material::lambert(Color(0x808080));
    let lights = [overhead_light(), overhead_light(), overhead_light()];
    let shaded = material.shade(Vec3::ZERO, Vec3::Y, &lights, 0.0);
    assert_eq!(shaded, Color::WHITE);
}
