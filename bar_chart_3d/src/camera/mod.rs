//! Camera module - static orbit configuration and the live perspective camera.
//!
//! The crate never steps orbit controls itself: the config describes them,
//! the render host runs them and pushes the resulting pose into `Camera`.

mod camera;
mod camera_config;

pub use camera::{Camera, Viewport};
pub use camera_config::{CameraConfig, build_camera_config};
