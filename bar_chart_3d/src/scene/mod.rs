//! Scene module
//!
//! Deterministic data-to-scene mapping: the bar grid, fixed decoration,
//! and the composed `ChartScene`.

mod chart_scene;
mod color;
mod decor;
mod grid;
mod primitive;

pub use chart_scene::ChartScene;
pub use color::Color;
pub use decor::{
    build_axis_lines, build_disk, build_lights,
    AXIS_ORIGIN, AXIS_COLOR, DISK_COLOR,
};
pub use grid::{
    build_grid, grid_cells, grid_color,
    GRID_SIZE, GRID_CELLS, GRID_PALETTE, AGE_PER_HEIGHT_UNIT,
};
pub use primitive::{
    Axis, AxisLineSpec, BoxSpec, DiskSpec, LightSpec, Primitive, PrimitiveKey,
};
