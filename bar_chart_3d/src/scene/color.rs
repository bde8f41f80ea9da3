/// Color - 24-bit RGB color stored as a `0xRRGGBB` hex value.

use glam::Vec3;
use serde::Serialize;

/// Packed `0xRRGGBB` color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);

    /// Scene background
    pub const BACKGROUND: Color = Color(0xced4da);

    /// Red component (0-255)
    pub fn r(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    /// Green component (0-255)
    pub fn g(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    /// Blue component (0-255)
    pub fn b(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// Normalized RGB in [0, 1], no gamma conversion
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r() as f32, self.g() as f32, self.b() as f32) / 255.0
    }

    /// Build from normalized RGB, clamping each channel
    pub fn from_vec3(rgb: Vec3) -> Self {
        let c = (rgb.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
        Color(((c.x as u32) << 16) | ((c.y as u32) << 8) | c.z as u32)
    }

    /// CSS hex notation, e.g. `#ff6b6b`
    pub fn to_css(self) -> String {
        format!("#{:06x}", self.0 & 0xffffff)
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
