//! Resource module
//!
//! Geometry, materials and meshes derived from scene primitives: the data a
//! render host turns into GPU objects.

pub mod geometry;
pub mod material;
pub mod mesh;

pub use geometry::{
    Geometry, Vertex, PrimitiveTopology,
    box_geometry, circle_geometry, line_geometry,
};
pub use material::{Material, MaterialKind};
pub use mesh::Mesh;
