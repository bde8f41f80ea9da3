/// Primitive specifications - declarative descriptions of everything a render
/// host has to draw. Pure data, no geometry.

use glam::Vec3;
use serde::Serialize;
use slotmap::new_key_type;
use super::color::Color;

new_key_type! {
    /// Stable key of a primitive inside a `ChartScene`
    pub struct PrimitiveKey;
}

// ===== BOX =====

/// One grid bar
///
/// `grid_x`/`grid_z` are cell indices (0..3); the world position uses the
/// grid spacing and lifts the box so it stands on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxSpec {
    grid_x: u32,
    grid_z: u32,
    height: f32,
    color: Color,
    position: Vec3,
}

impl BoxSpec {
    /// Footprint (width and depth) of every bar
    pub const FOOTPRINT: f32 = 1.0;

    /// Distance between neighbouring cells
    pub const SPACING: f32 = 2.0;

    pub fn new(grid_x: u32, grid_z: u32, height: f32, color: Color) -> Self {
        let position = Vec3::new(
            grid_x as f32 * Self::SPACING,
            height / 2.0,
            grid_z as f32 * Self::SPACING,
        );
        Self { grid_x, grid_z, height, color, position }
    }

    pub fn grid_x(&self) -> u32 {
        self.grid_x
    }

    pub fn grid_z(&self) -> u32 {
        self.grid_z
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Box center in world space
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Ground-plane anchor (`grid_x * 2`, 0, `grid_z * 2`)
    pub fn base_position(&self) -> Vec3 {
        Vec3::new(self.position.x, 0.0, self.position.z)
    }

    /// Box extents (width, height, depth)
    pub fn size(&self) -> Vec3 {
        Vec3::new(Self::FOOTPRINT, self.height, Self::FOOTPRINT)
    }
}

// ===== AXIS LINES =====

/// Direction indicated by an axis line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// A single line segment marking a coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLineSpec {
    pub axis: Axis,
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
}

// ===== DISK =====

/// Flat decorative disk under the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiskSpec {
    pub radius: f32,
    pub segments: u32,
    pub position: Vec3,
    /// Point the disk's front face is turned towards
    pub look_at: Vec3,
    pub color: Color,
}

impl DiskSpec {
    /// Unit normal of the front face
    pub fn normal(&self) -> Vec3 {
        (self.look_at - self.position).normalize_or(Vec3::Z)
    }
}

// ===== LIGHTS =====

/// Point light
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightSpec {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
    /// Distance at which the light's contribution reaches zero
    pub range: f32,
}

impl LightSpec {
    /// Linear distance attenuation in [0, 1]
    pub fn attenuation(&self, point: Vec3) -> f32 {
        if self.range <= 0.0 {
            return 1.0;
        }
        (1.0 - point.distance(self.position) / self.range).clamp(0.0, 1.0)
    }
}

// ===== PRIMITIVE =====

/// Any primitive stored in a `ChartScene`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Box(BoxSpec),
    Disk(DiskSpec),
    AxisLine(AxisLineSpec),
    Light(LightSpec),
}

impl Primitive {
    pub fn as_box(&self) -> Option<&BoxSpec> {
        match self {
            Primitive::Box(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_axis_line(&self) -> Option<&AxisLineSpec> {
        match self {
            Primitive::AxisLine(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_disk(&self) -> Option<&DiskSpec> {
        match self {
            Primitive::Disk(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_light(&self) -> Option<&LightSpec> {
        match self {
            Primitive::Light(spec) => Some(spec),
            _ => None,
        }
    }
}
