use std::collections::HashSet;
use glam::Vec3;
use super::*;

fn ascending_records() -> Vec<Record> {
    (1..=16).map(|i| Record::new(i as f64 * 10.0)).collect()
}

// ============================================================================
// Shape of the grid
// ============================================================================

#[test]
fn test_build_grid_produces_sixteen_boxes() {
    let boxes = build_grid(&ascending_records()).unwrap();
    assert_eq!(boxes.len(), GRID_CELLS);
}

#[test]
fn test_build_grid_covers_every_cell_once() {
    let boxes = build_grid(&ascending_records()).unwrap();
    let cells: HashSet<(u32, u32)> = boxes.iter().map(|b| (b.grid_x(), b.grid_z())).collect();

    assert_eq!(cells.len(), 16);
    for x in 0..4 {
        for z in 0..4 {
            assert!(cells.contains(&(x, z)), "missing cell ({}, {})", x, z);
        }
    }
}

#[test]
fn test_grid_cells_row_major_order() {
    let cells: Vec<(u32, u32)> = grid_cells().collect();
    assert_eq!(cells.len(), 16);
    assert_eq!(&cells[..5], &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 0)]);
    assert_eq!(cells[15], (3, 3));
}

// ============================================================================
// Height mapping
// ============================================================================

#[test]
fn test_heights_follow_row_major_consumption() {
    let records = ascending_records();
    let boxes = build_grid(&records).unwrap();

    for (i, b) in boxes.iter().enumerate() {
        assert_eq!(b.grid_x() * 4 + b.grid_z(), i as u32);
        assert_eq!(b.height() as f64, records[i].age.unwrap() / 10.0);
    }
}

#[test]
fn test_first_and_last_box() {
    let boxes = build_grid(&ascending_records()).unwrap();

    let first = &boxes[0];
    assert_eq!((first.grid_x(), first.grid_z()), (0, 0));
    assert_eq!(first.height(), 1.0);
    assert_eq!(first.color(), Color(0xff6b6b));
    assert_eq!(first.base_position(), Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(first.position(), Vec3::new(0.0, 0.5, 0.0));

    let last = &boxes[15];
    assert_eq!((last.grid_x(), last.grid_z()), (3, 3));
    assert_eq!(last.height(), 16.0);
    assert_eq!(last.color(), Color(0x51cf66));
    assert_eq!(last.base_position(), Vec3::new(6.0, 0.0, 6.0));
    assert_eq!(last.position(), Vec3::new(6.0, 8.0, 6.0));
}

#[test]
fn test_box_size_uses_unit_footprint() {
    let boxes = build_grid(&ascending_records()).unwrap();
    assert_eq!(boxes[4].size(), Vec3::new(1.0, 5.0, 1.0));
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn test_color_depends_only_on_grid_z() {
    // Scrambled ages must not change colors
    let records: Vec<Record> = [73.0, 5.0, 41.0, 88.0, 12.0, 60.0, 33.0, 19.0,
        95.0, 27.0, 54.0, 2.0, 66.0, 81.0, 38.0, 47.0]
        .iter()
        .map(|&age| Record::new(age))
        .collect();

    let boxes = build_grid(&records).unwrap();
    for b in &boxes {
        assert_eq!(b.color(), GRID_PALETTE[b.grid_z() as usize]);
    }
}

#[test]
fn test_palette_values() {
    assert_eq!(grid_color(0), Color(0xff6b6b));
    assert_eq!(grid_color(1), Color(0x845ef7));
    assert_eq!(grid_color(2), Color(0x339af0));
    assert_eq!(grid_color(3), Color(0x51cf66));
}

// ============================================================================
// Preconditions
// ============================================================================

#[test]
fn test_fewer_than_sixteen_records_fails() {
    let records: Vec<Record> = ascending_records().into_iter().take(15).collect();
    match build_grid(&records) {
        Err(Error::InsufficientRecords { expected, actual }) => {
            assert_eq!(expected, 16);
            assert_eq!(actual, 15);
        }
        other => panic!("expected InsufficientRecords, got {:?}", other),
    }
}

#[test]
fn test_empty_input_fails() {
    assert!(matches!(
        build_grid(&[]),
        Err(Error::InsufficientRecords { actual: 0, .. })
    ));
}

#[test]
fn test_surplus_records_are_ignored() {
    let mut records = ascending_records();
    records.push(Record::new(999.0));
    records.push(Record::without_age());

    let boxes = build_grid(&records).unwrap();
    assert_eq!(boxes.len(), 16);
    assert_eq!(boxes[15].height(), 16.0);
}

#[test]
fn test_missing_age_fails_with_index() {
    let mut records = ascending_records();
    records[6] = Record::without_age().with_field("name", "unknown");

    match build_grid(&records) {
        Err(Error::InvalidRecord { index, .. }) => assert_eq!(index, 6),
        other => panic!("expected InvalidRecord, got {:?}", other),
    }
}

#[test]
fn test_negative_age_fails() {
    let mut records = ascending_records();
    records[0] = Record::new(-1.0);
    assert!(matches!(build_grid(&records), Err(Error::InvalidRecord { index: 0, .. })));
}

#[test]
fn test_age_too_large_for_height_fails() {
    let mut records = ascending_records();
    records[0] = Record::new(1e300);

    match build_grid(&records) {
        Err(Error::InvalidRecord { index, reason }) => {
            assert_eq!(index, 0);
            assert!(reason.contains("out of range"));
        }
        other => panic!("expected InvalidRecord, got {:?}", other),
    }
}

#[test]
fn test_age_too_small_for_height_fails() {
    let mut records = ascending_records();
    records[5] = Record::new(1e-300);
    assert!(matches!(build_grid(&records), Err(Error::InvalidRecord { index: 5, .. })));
}
