/// Tests for FrameStats accounting

use crate::data::Record;
use crate::resource::Mesh;
use crate::scene::ChartScene;
use super::*;

#[test]
fn test_frame_stats_default_is_zero() {
    let stats = FrameStats::default();
    assert_eq!(stats.frame_index, 0);
    assert_eq!(stats.draw_calls, 0);
    assert_eq!(stats.triangles, 0);
    assert_eq!(stats.lines, 0);
}

#[test]
fn test_frame_stats_for_standard_scene() {
    let records: Vec<Record> = (1..=16).map(|i| Record::new(i as f64 * 10.0)).collect();
    let scene = ChartScene::build(&records).unwrap();
    let meshes = Mesh::build_all(&scene).unwrap();

    let stats = FrameStats::for_meshes(7, &meshes);

    assert_eq!(stats.frame_index, 7);
    // 16 boxes + disk + 3 axis lines, lights draw nothing
    assert_eq!(stats.draw_calls, 20);
    // 12 triangles per box, 64 for the disk
    assert_eq!(stats.triangles, 16 * 12 + 64);
    assert_eq!(stats.lines, 3);
}

#[test]
fn test_frame_stats_for_no_meshes() {
    let stats = FrameStats::for_meshes(3, &[]);
    assert_eq!(stats, FrameStats { frame_index: 3, ..FrameStats::default() });
}
