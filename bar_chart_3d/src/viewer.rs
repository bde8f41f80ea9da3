/// Viewer - wires a chart scene, its camera and a render host together.
///
/// Owns all three. The host application forwards window events: resizes go
/// through `on_resize`, display refreshes through `on_frame`.

use glam::Vec3;
use crate::camera::{Camera, Viewport};
use crate::data::Record;
use crate::error::Result;
use crate::host::{FrameStats, RenderHost};
use crate::scene::ChartScene;
use crate::{engine_debug, engine_error, engine_info};

pub struct Viewer<H: RenderHost> {
    scene: ChartScene,
    camera: Camera,
    host: H,
}

impl<H: RenderHost> Viewer<H> {
    /// Build the scene from `records`, place the camera and hand both to `host`
    ///
    /// # Errors
    ///
    /// Scene construction errors (too few records, unusable `age`) and any
    /// error the host reports while loading.
    pub fn new(records: &[Record], viewport: Viewport, mut host: H) -> Result<Self> {
        let scene = ChartScene::build(records)?;
        let camera = Camera::from_config(scene.camera_config(), viewport);

        if let Err(e) = host.load_scene(&scene, &camera) {
            engine_error!("barchart3d::Viewer", "Render host rejected the scene: {}", e);
            return Err(e);
        }

        engine_info!("barchart3d::Viewer",
            "Viewer ready: {} primitives, viewport {}x{}",
            scene.primitive_count(), viewport.width(), viewport.height());

        Ok(Self { scene, camera, host })
    }

    /// Follow a window resize
    ///
    /// Zero-sized viewports (minimized windows) are rejected and leave the
    /// camera and host untouched. The host goes first: when it rejects the
    /// size, the camera keeps the viewport the host still has.
    pub fn on_resize(&mut self, width: u32, height: u32) -> Result<()> {
        let viewport = Viewport::new(width, height)?;
        self.host.resize(viewport)?;
        self.camera.resize(viewport);
        engine_debug!("barchart3d::Viewer", "Resized to {}x{}", width, height);
        Ok(())
    }

    /// Render one frame from the current camera pose
    pub fn on_frame(&mut self) -> Result<FrameStats> {
        self.host.render_frame(&self.camera)
    }

    /// Move the camera (orbit controller output)
    ///
    /// Rejected poses leave the camera where it was.
    pub fn set_camera_pose(&mut self, position: Vec3, target: Vec3) -> Result<()> {
        self.camera.set_pose(position, target)
    }

    // ===== ACCESSORS =====

    pub fn scene(&self) -> &ChartScene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Give the host back, dropping scene and camera
    pub fn into_host(self) -> H {
        self.host
    }
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
