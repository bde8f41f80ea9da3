/// Camera - perspective camera driven by a `CameraConfig` and a viewport.
///
/// Unlike the config, the camera is live state: the render host moves it
/// (orbit controller) and the viewer resizes it. Matrices are recomputed
/// eagerly on every change so getters stay cheap.

use glam::{Mat4, Vec3, Vec4Swizzles};
use crate::error::{Error, Result};
use super::camera_config::CameraConfig;

/// Output surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidViewport(format!("{}x{}", width, height)));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Eye-to-target distances below this are treated as coincident
const MIN_EYE_DISTANCE: f32 = 1e-4;

/// World up, or -Z when looking straight along the Y axis (top-down views)
fn view_up(forward: Vec3) -> Vec3 {
    if forward.normalize_or_zero().cross(Vec3::Y).length_squared() < 1e-8 {
        Vec3::NEG_Z
    } else {
        Vec3::Y
    }
}

/// Perspective camera
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    fov_y_radians: f32,
    near: f32,
    far: f32,
    viewport: Viewport,
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Create a camera at the configured pose, sized to `viewport`
    pub fn from_config(config: &CameraConfig, viewport: Viewport) -> Self {
        let mut camera = Self {
            position: config.position,
            target: config.target,
            fov_y_radians: config.fov_y_degrees.to_radians(),
            near: config.near,
            far: config.far,
            viewport,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.update_view();
        camera.update_projection();
        camera
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current aspect ratio (follows the viewport)
    pub fn aspect(&self) -> f32 {
        self.viewport.aspect()
    }

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (OpenGL clip conventions).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    // ===== UPDATES =====

    /// Move the eye and orbit target (called by the host's orbit controller)
    ///
    /// A pose looking straight up or down the Y axis is valid.
    ///
    /// # Errors
    ///
    /// `Error::InvalidCameraPose` when a coordinate is not finite or the eye
    /// sits on the target. The previous pose is kept.
    pub fn set_pose(&mut self, position: Vec3, target: Vec3) -> Result<()> {
        if !position.is_finite() || !target.is_finite() {
            return Err(Error::InvalidCameraPose(format!(
                "non-finite pose: eye {} target {}", position, target
            )));
        }
        if position.distance_squared(target) < MIN_EYE_DISTANCE * MIN_EYE_DISTANCE {
            return Err(Error::InvalidCameraPose(format!(
                "eye {} coincides with target", position
            )));
        }
        self.position = position;
        self.target = target;
        self.update_view();
        Ok(())
    }

    /// Follow a viewport resize: new aspect ratio, same pose and lens.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.update_projection();
    }

    /// Project a world-space point to pixel coordinates.
    ///
    /// Returns `(x, y, depth)` with y pointing down and depth the NDC z in
    /// [-1, 1]. `None` when the point is behind the eye or the projection
    /// is not finite.
    pub fn world_to_screen(&self, point: Vec3) -> Option<Vec3> {
        let clip = self.view_projection_matrix() * point.extend(1.0);
        if clip.w.is_nan() || clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        let width = self.viewport.width as f32;
        let height = self.viewport.height as f32;
        let screen = Vec3::new(
            (ndc.x + 1.0) * 0.5 * width,
            (1.0 - ndc.y) * 0.5 * height,
            ndc.z,
        );
        screen.is_finite().then_some(screen)
    }

    fn update_view(&mut self) {
        self.view_matrix = Mat4::look_at_rh(self.position, self.target, view_up(self.target - self.position));
    }

    fn update_projection(&mut self) {
        self.projection_matrix = Mat4::perspective_rh_gl(
            self.fov_y_radians,
            self.viewport.aspect(),
            self.near,
            self.far,
        );
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
