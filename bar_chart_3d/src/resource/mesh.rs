/// Mesh - geometry + material + world transform for one drawable primitive.
///
/// Built from the scene's primitive specs; lights have no mesh.

use glam::{Mat4, Quat, Vec3};
use crate::error::Result;
use crate::scene::{ChartScene, Primitive, PrimitiveKey};
use super::geometry::{box_geometry, circle_geometry, line_geometry, Geometry};
use super::material::Material;

/// A drawable primitive
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    geometry: Geometry,
    material: Material,
    world_matrix: Mat4,
}

impl Mesh {
    /// Build the mesh for a primitive. `Ok(None)` for lights.
    ///
    /// - Box: box geometry with the bar's size, translated to the bar center
    /// - Disk: circle geometry rotated so its front (+Z) faces `look_at`
    /// - Axis line: line geometry in world coordinates
    pub fn from_primitive(primitive: &Primitive) -> Result<Option<Self>> {
        let mesh = match primitive {
            Primitive::Box(spec) => {
                let size = spec.size();
                Self {
                    geometry: box_geometry(size.x, size.y, size.z)?,
                    material: Material::lambert(spec.color()),
                    world_matrix: Mat4::from_translation(spec.position()),
                }
            }
            Primitive::Disk(spec) => {
                let rotation = Quat::from_rotation_arc(Vec3::Z, spec.normal());
                Self {
                    geometry: circle_geometry(spec.radius, spec.segments)?,
                    material: Material::basic(spec.color),
                    world_matrix: Mat4::from_rotation_translation(rotation, spec.position),
                }
            }
            Primitive::AxisLine(spec) => Self {
                geometry: line_geometry(spec.start, spec.end),
                material: Material::line_basic(spec.color),
                world_matrix: Mat4::IDENTITY,
            },
            Primitive::Light(_) => return Ok(None),
        };
        Ok(Some(mesh))
    }

    /// Meshes for every drawable primitive of a scene, in creation order
    pub fn build_all(scene: &ChartScene) -> Result<Vec<(PrimitiveKey, Mesh)>> {
        let mut meshes = Vec::with_capacity(scene.primitive_count());
        for (key, _, primitive) in scene.primitives() {
            if let Some(mesh) = Self::from_primitive(primitive)? {
                meshes.push((key, mesh));
            }
        }
        Ok(meshes)
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// Transform a local-space position to world space
    pub fn to_world_point(&self, local: Vec3) -> Vec3 {
        self.world_matrix.transform_point3(local)
    }

    /// Transform a local-space normal to world space.
    ///
    /// Mesh transforms are rigid (rotation + translation), so the rotation
    /// part is the normal matrix.
    pub fn to_world_normal(&self, local: Vec3) -> Vec3 {
        self.world_matrix.transform_vector3(local).normalize_or_zero()
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
