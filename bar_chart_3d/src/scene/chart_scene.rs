/// ChartScene - the composed, caller-owned description of the whole chart.
///
/// Uses a SlotMap so hosts can hold stable keys to primitives; a separate
/// entry list keeps creation order and names.

use rustc_hash::FxHashMap;
use serde::Serialize;
use slotmap::SlotMap;
use crate::camera::{CameraConfig, build_camera_config};
use crate::data::{DataSource, Record};
use crate::error::{Error, Result};
use crate::{engine_debug, engine_info};
use super::color::Color;
use super::decor::{build_axis_lines, build_disk, build_lights};
use super::grid::build_grid;
use super::primitive::{AxisLineSpec, BoxSpec, DiskSpec, LightSpec, Primitive, PrimitiveKey};

/// The full chart: background, primitives in creation order, camera setup
#[derive(Debug, Clone)]
pub struct ChartScene {
    background: Color,
    primitives: SlotMap<PrimitiveKey, Primitive>,
    /// Creation order with names
    entries: Vec<(PrimitiveKey, String)>,
    names: FxHashMap<String, PrimitiveKey>,
    camera_config: CameraConfig,
}

/// JSON view of one primitive
#[derive(Serialize)]
struct NamedPrimitive<'a> {
    name: &'a str,
    primitive: &'a Primitive,
}

/// JSON view of the scene
#[derive(Serialize)]
struct SceneExport<'a> {
    background: Color,
    camera: &'a CameraConfig,
    primitives: Vec<NamedPrimitive<'a>>,
}

impl ChartScene {
    fn empty(camera_config: CameraConfig) -> Self {
        Self {
            background: Color::BACKGROUND,
            primitives: SlotMap::with_key(),
            entries: Vec::new(),
            names: FxHashMap::default(),
            camera_config,
        }
    }

    /// Build the chart from the data records.
    ///
    /// Insertion order: 16 boxes, disk, axis lines (Y, X, Z), lights.
    ///
    /// # Errors
    ///
    /// Propagates `build_grid` failures (too few records, unusable `age`).
    pub fn build(records: &[Record]) -> Result<Self> {
        let boxes = build_grid(records)?;
        let mut scene = Self::empty(build_camera_config());

        for spec in boxes {
            scene.insert(format!("box_{}_{}", spec.grid_x(), spec.grid_z()), Primitive::Box(spec));
        }
        scene.insert("disk".to_string(), Primitive::Disk(build_disk()));
        for line in build_axis_lines() {
            scene.insert(format!("axis_{}", line.axis.name()), Primitive::AxisLine(line));
        }
        for (i, light) in build_lights().into_iter().enumerate() {
            scene.insert(format!("light_{}", i), Primitive::Light(light));
        }

        engine_info!("barchart3d::Scene", "Scene built with {} primitives", scene.primitive_count());

        Ok(scene)
    }

    /// Build the chart from a loaded data source
    pub fn from_data_source(source: &DataSource) -> Result<Self> {
        Self::build(source.records())
    }

    fn insert(&mut self, name: String, primitive: Primitive) -> PrimitiveKey {
        let key = self.primitives.insert(primitive);
        engine_debug!("barchart3d::Scene", "Added primitive '{}'", name);
        self.names.insert(name.clone(), key);
        self.entries.push((key, name));
        key
    }

    // ===== ACCESSORS =====

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn camera_config(&self) -> &CameraConfig {
        &self.camera_config
    }

    /// Get a primitive by key
    pub fn primitive(&self, key: PrimitiveKey) -> Option<&Primitive> {
        self.primitives.get(key)
    }

    /// Get a primitive key by name
    pub fn key_by_name(&self, name: &str) -> Option<PrimitiveKey> {
        self.names.get(name).copied()
    }

    /// Get a primitive by name, failing with a logged error if unknown
    pub fn primitive_by_name(&self, name: &str) -> Result<&Primitive> {
        self.key_by_name(name)
            .and_then(|key| self.primitives.get(key))
            .ok_or_else(|| crate::engine_err!("barchart3d::Scene", "Unknown primitive '{}'", name))
    }

    /// Iterate over (key, name, primitive) in creation order
    pub fn primitives(&self) -> impl Iterator<Item = (PrimitiveKey, &str, &Primitive)> {
        self.entries.iter().filter_map(|(key, name)| {
            self.primitives.get(*key).map(|p| (*key, name.as_str(), p))
        })
    }

    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Grid bars in creation (row-major) order
    pub fn boxes(&self) -> impl Iterator<Item = &BoxSpec> {
        self.primitives().filter_map(|(_, _, p)| p.as_box())
    }

    pub fn axis_lines(&self) -> impl Iterator<Item = &AxisLineSpec> {
        self.primitives().filter_map(|(_, _, p)| p.as_axis_line())
    }

    pub fn disk(&self) -> Option<&DiskSpec> {
        self.primitives().find_map(|(_, _, p)| p.as_disk())
    }

    pub fn lights(&self) -> impl Iterator<Item = &LightSpec> {
        self.primitives().filter_map(|(_, _, p)| p.as_light())
    }

    /// Export the scene as pretty-printed JSON for an external host
    pub fn to_json(&self) -> Result<String> {
        let export = SceneExport {
            background: self.background,
            camera: &self.camera_config,
            primitives: self
                .primitives()
                .map(|(_, name, primitive)| NamedPrimitive { name, primitive })
                .collect(),
        };
        serde_json::to_string_pretty(&export)
            .map_err(|e| Error::InvalidResource(format!("scene export failed: {}", e)))
    }
}

#[cfg(test)]
#[path = "chart_scene_tests.rs"]
mod tests;
