//! CPU-side geometry for chart primitives.
//!
//! A `Geometry` is an interleaved vertex array, an optional index array and a
//! topology. This is the data a render host uploads; generators here follow
//! the usual conventions:
//!
//! - Box: 6 faces × 4 vertices (per-face normals), 36 indices, centered
//! - Circle: triangle fan in the XY plane facing +Z, center vertex first,
//!   rim closed with a duplicated vertex (`segments + 2` vertices)
//! - Line: 2 vertices, no indices
//!
//! All triangles are counter-clockwise when seen from the front.

use std::f32::consts::TAU;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use crate::error::Result;
use crate::engine_bail;

// ============================================================================
// VERTEX
// ============================================================================

/// Interleaved vertex: position + normal (24 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// How vertices are assembled into primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    TriangleList,
    LineList,
}

// ============================================================================
// GEOMETRY
// ============================================================================

/// Vertex and index data for one primitive
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    topology: PrimitiveTopology,
}

impl Geometry {
    // ===== ACCESSORS =====

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Check if this geometry uses indexed drawing
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Raw vertex buffer contents
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index buffer contents (u32 indices)
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Iterate over triangles as vertex triples.
    ///
    /// Empty for line geometry.
    pub fn triangles(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        let indices: &[u32] = match self.topology {
            PrimitiveTopology::TriangleList => &self.indices,
            PrimitiveTopology::LineList => &[],
        };
        indices.chunks_exact(3).map(move |tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }
}

// ============================================================================
// GENERATORS
// ============================================================================

/// Face table for boxes: (normal, u, v) with u × v = normal
const BOX_FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

fn check_extent(source: &str, name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        engine_bail!(source, "{} must be positive and finite, got {}", name, value);
    }
    Ok(())
}

/// Axis-aligned box centered at the origin
pub fn box_geometry(width: f32, height: f32, depth: f32) -> Result<Geometry> {
    check_extent("barchart3d::Geometry", "box width", width)?;
    check_extent("barchart3d::Geometry", "box height", height)?;
    check_extent("barchart3d::Geometry", "box depth", depth)?;

    let half = Vec3::new(width, height, depth) * 0.5;
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in BOX_FACES {
        let base = vertices.len() as u32;
        for (su, sv) in [(-1.0f32, -1.0f32), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let corner = (normal + u * su + v * sv) * half;
            vertices.push(Vertex::new(corner, normal));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Ok(Geometry {
        vertices,
        indices,
        topology: PrimitiveTopology::TriangleList,
    })
}

/// Flat disk in the XY plane, facing +Z
pub fn circle_geometry(radius: f32, segments: u32) -> Result<Geometry> {
    check_extent("barchart3d::Geometry", "circle radius", radius)?;
    if segments < 3 {
        engine_bail!("barchart3d::Geometry", "circle needs at least 3 segments, got {}", segments);
    }

    let mut vertices = Vec::with_capacity(segments as usize + 2);
    vertices.push(Vertex::new(Vec3::ZERO, Vec3::Z));
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        vertices.push(Vertex::new(Vec3::new(radius * cos, radius * sin, 0.0), Vec3::Z));
    }

    let indices = (1..=segments).flat_map(|i| [i, i + 1, 0]).collect();

    Ok(Geometry {
        vertices,
        indices,
        topology: PrimitiveTopology::TriangleList,
    })
}

/// Single line segment
pub fn line_geometry(start: Vec3, end: Vec3) -> Geometry {
    Geometry {
        vertices: vec![Vertex::new(start, Vec3::ZERO), Vertex::new(end, Vec3::ZERO)],
        indices: Vec::new(),
        topology: PrimitiveTopology::LineList,
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
