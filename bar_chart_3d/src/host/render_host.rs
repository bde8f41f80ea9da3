/// RenderHost trait - the seam between the scene builder and whatever draws it

use crate::camera::{Camera, Viewport};
use crate::error::Result;
use crate::resource::{Mesh, PrimitiveTopology};
use crate::scene::{ChartScene, PrimitiveKey};

/// Per-frame statistics reported by a host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Zero-based index of the rendered frame
    pub frame_index: u64,
    /// Number of meshes submitted this frame
    pub draw_calls: u32,
    /// Number of triangles drawn this frame
    pub triangles: u32,
    /// Number of line segments drawn this frame
    pub lines: u32,
}

impl FrameStats {
    /// Statistics for drawing every mesh in full
    pub fn for_meshes(frame_index: u64, meshes: &[(PrimitiveKey, Mesh)]) -> Self {
        let mut stats = Self { frame_index, ..Self::default() };
        for (_, mesh) in meshes {
            let geometry = mesh.geometry();
            stats.draw_calls += 1;
            match geometry.topology() {
                PrimitiveTopology::TriangleList => stats.triangles += geometry.index_count() / 3,
                PrimitiveTopology::LineList => stats.lines += geometry.vertex_count() / 2,
            }
        }
        stats
    }
}

/// External renderer and interaction loop
///
/// The host receives the scene once, then reacts to viewport resizes and
/// frame ticks. Orbit controls (auto-rotation, damping, input) belong to the
/// host: it updates the camera pose between frames.
pub trait RenderHost {
    /// Take ownership of the scene's live representation
    fn load_scene(&mut self, scene: &ChartScene, camera: &Camera) -> Result<()>;

    /// Follow a viewport resize
    fn resize(&mut self, viewport: Viewport) -> Result<()>;

    /// Draw one frame from the camera's current pose
    ///
    /// # Errors
    ///
    /// `Error::HostNotReady` if no scene has been loaded.
    fn render_frame(&mut self, camera: &Camera) -> Result<FrameStats>;
}

#[cfg(test)]
#[path = "render_host_tests.rs"]
mod tests;
