/// Recording host - a RenderHost that draws nothing and remembers every call.
///
/// Used by tests to check what the viewer hands to its host.

use crate::camera::{Camera, Viewport};
use crate::error::{Error, Result};
use crate::resource::Mesh;
use crate::scene::{ChartScene, PrimitiveKey};
use super::render_host::{FrameStats, RenderHost};

/// One recorded host call
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    LoadScene { primitive_count: usize, mesh_count: usize },
    Resize { width: u32, height: u32 },
    RenderFrame { frame_index: u64, aspect: f32 },
}

/// Host that records calls instead of rendering
#[derive(Debug, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
    meshes: Option<Vec<(PrimitiveKey, Mesh)>>,
    viewport: Option<Viewport>,
    frames: u64,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls received so far, in order
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Meshes built at load time (None before `load_scene`)
    pub fn meshes(&self) -> Option<&[(PrimitiveKey, Mesh)]> {
        self.meshes.as_deref()
    }

    /// Last viewport seen through `load_scene` or `resize`
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl RenderHost for RecordingHost {
    fn load_scene(&mut self, scene: &ChartScene, camera: &Camera) -> Result<()> {
        let meshes = Mesh::build_all(scene)?;
        self.calls.push(HostCall::LoadScene {
            primitive_count: scene.primitive_count(),
            mesh_count: meshes.len(),
        });
        self.meshes = Some(meshes);
        self.viewport = Some(*camera.viewport());
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<()> {
        self.calls.push(HostCall::Resize {
            width: viewport.width(),
            height: viewport.height(),
        });
        self.viewport = Some(viewport);
        Ok(())
    }

    fn render_frame(&mut self, camera: &Camera) -> Result<FrameStats> {
        let meshes = self
            .meshes
            .as_deref()
            .ok_or_else(|| Error::HostNotReady("render_frame before load_scene".to_string()))?;

        let stats = FrameStats::for_meshes(self.frames, meshes);
        self.calls.push(HostCall::RenderFrame {
            frame_index: self.frames,
            aspect: camera.aspect(),
        });
        self.frames += 1;
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "recording_host_tests.rs"]
mod tests;
