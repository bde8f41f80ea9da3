/// Tests for Viewer

use glam::Vec3;
use crate::error::Error;
use crate::host::{HostCall, RecordingHost};
use super::*;

fn create_test_records() -> Vec<Record> {
    (1..=16).map(|i| Record::new(i as f64 * 10.0)).collect()
}

fn create_test_viewer() -> Viewer<RecordingHost> {
    Viewer::new(&create_test_records(), Viewport::new(1280, 720).unwrap(), RecordingHost::new()).unwrap()
}

#[test]
fn test_new_loads_scene_into_host() {
    let viewer = create_test_viewer();

    assert_eq!(viewer.scene().primitive_count(), 22);
    assert_eq!(
        viewer.host().calls(),
        &[HostCall::LoadScene { primitive_count: 22, mesh_count: 20 }]
    );
    assert_eq!(viewer.camera().position(), Vec3::new(10.0, 10.0, 10.0));
    assert_eq!(viewer.camera().target(), Vec3::new(3.0, 0.0, 3.0));
}

#[test]
fn test_new_with_too_few_records_fails() {
    let records: Vec<Record> = (1..=15).map(|i| Record::new(i as f64)).collect();
    let result = Viewer::new(&records, Viewport::new(800, 600).unwrap(), RecordingHost::new());

    assert!(matches!(
        result,
        Err(Error::InsufficientRecords { expected: 16, actual: 15 })
    ));
}

#[test]
fn test_on_resize_updates_camera_and_host() {
    let mut viewer = create_test_viewer();
    viewer.on_resize(600, 600).unwrap();

    assert_eq!(viewer.camera().viewport().width(), 600);
    assert!((viewer.camera().aspect() - 1.0).abs() < 1e-6);
    assert_eq!(viewer.host().calls()[1], HostCall::Resize { width: 600, height: 600 });
}

#[test]
fn test_on_resize_rejects_zero() {
    let mut viewer = create_test_viewer();
    let before = *viewer.camera().projection_matrix();

    assert!(matches!(viewer.on_resize(0, 600), Err(Error::InvalidViewport(_))));
    assert_eq!(*viewer.camera().projection_matrix(), before);
    assert_eq!(viewer.host().calls().len(), 1);
}

#[test]
fn test_on_frame_counts() {
    let mut viewer = create_test_viewer();

    let first = viewer.on_frame().unwrap();
    let second = viewer.on_frame().unwrap();

    assert_eq!(first.frame_index, 0);
    assert_eq!(second.frame_index, 1);
    assert_eq!(second.draw_calls, 20);
    assert_eq!(viewer.host().frame_count(), 2);
}

#[test]
fn test_set_camera_pose() {
    let mut viewer = create_test_viewer();
    viewer.set_camera_pose(Vec3::new(-10.0, 10.0, -10.0), Vec3::new(3.0, 0.0, 3.0)).unwrap();
    assert_eq!(viewer.camera().position(), Vec3::new(-10.0, 10.0, -10.0));
}

#[test]
fn test_set_camera_pose_rejects_eye_on_target() {
    let mut viewer = create_test_viewer();
    let result = viewer.set_camera_pose(Vec3::new(3.0, 0.0, 3.0), Vec3::new(3.0, 0.0, 3.0));

    assert!(matches!(result, Err(Error::InvalidCameraPose(_))));
    assert_eq!(viewer.camera().position(), Vec3::new(10.0, 10.0, 10.0));
}

/// Host that refuses every resize
struct FixedSizeHost(RecordingHost);

impl RenderHost for FixedSizeHost {
    fn load_scene(&mut self, scene: &ChartScene, camera: &Camera) -> Result<()> {
        self.0.load_scene(scene, camera)
    }

    fn resize(&mut self, _viewport: Viewport) -> Result<()> {
        Err(Error::HostNotReady("fixed-size surface".to_string()))
    }

    fn render_frame(&mut self, camera: &Camera) -> Result<FrameStats> {
        self.0.render_frame(camera)
    }
}

#[test]
fn test_on_resize_rejected_by_host_keeps_camera() {
    let viewport = Viewport::new(1280, 720).unwrap();
    let mut viewer = Viewer::new(&create_test_records(), viewport, FixedSizeHost(RecordingHost::new())).unwrap();

    assert!(matches!(viewer.on_resize(640, 640), Err(Error::HostNotReady(_))));
    assert_eq!(*viewer.camera().viewport(), viewport);
    assert!((viewer.camera().aspect() - 1280.0 / 720.0).abs() < 1e-6);
}

#[test]
fn test_into_host() {
    let mut viewer = create_test_viewer();
    viewer.on_frame().unwrap();
    let host = viewer.into_host();
    assert_eq!(host.calls().len(), 2);
}
