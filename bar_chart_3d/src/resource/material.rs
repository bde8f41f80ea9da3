/// Resource-level material type.
///
/// A Material is a pure data description of how a surface reacts to light.
/// Bars are lit (Lambert), the disk and axis lines are flat colored.

use glam::Vec3;
use crate::scene::{Color, LightSpec};

/// Shading model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// Diffuse, lit by the scene's point lights
    Lambert,
    /// Flat color, ignores lights
    Basic,
    /// Flat color for line primitives
    LineBasic,
}

/// Material resource
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    kind: MaterialKind,
    color: Color,
}

impl Material {
    pub fn lambert(color: Color) -> Self {
        Self { kind: MaterialKind::Lambert, color }
    }

    pub fn basic(color: Color) -> Self {
        Self { kind: MaterialKind::Basic, color }
    }

    pub fn line_basic(color: Color) -> Self {
        Self { kind: MaterialKind::LineBasic, color }
    }

    pub fn kind(&self) -> MaterialKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether shading depends on lights
    pub fn is_lit(&self) -> bool {
        self.kind == MaterialKind::Lambert
    }

    /// Shaded color of a surface point.
    ///
    /// Lambert: `color * (ambient + Σ max(0, n·l) * intensity * attenuation * light_color)`,
    /// clamped per channel. Unlit kinds return their color unchanged.
    pub fn shade(&self, point: Vec3, normal: Vec3, lights: &[LightSpec], ambient: f32) -> Color {
        if !self.is_lit() {
            return self.color;
        }

        let normal = normal.normalize_or_zero();
        let irradiance = lights.iter().fold(Vec3::splat(ambient), |acc, light| {
            let to_light = (light.position - point).normalize_or_zero();
            let diffuse = normal.dot(to_light).max(0.0);
            acc + light.color.to_vec3() * (diffuse * light.intensity * light.attenuation(point))
        });

        Color::from_vec3(self.color.to_vec3() * irradiance)
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
