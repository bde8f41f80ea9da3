/// Grid builder - maps the data source onto the 4×4 bar grid.
///
/// Cells are visited row-major (x outer, z inner) and paired one-to-one
/// with records in source order. The pairing is an explicit zip over a
/// bounded index range, after the record count has been checked.

use crate::data::Record;
use crate::error::{Error, Result};
use crate::{engine_error, engine_trace, engine_warn};
use super::color::Color;
use super::primitive::BoxSpec;

/// Cells per grid side
pub const GRID_SIZE: u32 = 4;

/// Total cells, i.e. records consumed by the grid
pub const GRID_CELLS: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Age units per world unit of bar height
pub const AGE_PER_HEIGHT_UNIT: f64 = 10.0;

/// Bar colors, indexed by `grid_z`
pub const GRID_PALETTE: [Color; GRID_SIZE as usize] = [
    Color(0xff6b6b),
    Color(0x845ef7),
    Color(0x339af0),
    Color(0x51cf66),
];

/// Bar color for a grid row. Depends on `grid_z` only.
///
/// Out-of-range rows wrap around the palette.
pub fn grid_color(grid_z: u32) -> Color {
    GRID_PALETTE[(grid_z % GRID_SIZE) as usize]
}

/// Row-major cell coordinates: (0,0), (0,1), .. (0,3), (1,0), .. (3,3)
pub fn grid_cells() -> impl Iterator<Item = (u32, u32)> {
    (0..GRID_SIZE).flat_map(|x| (0..GRID_SIZE).map(move |z| (x, z)))
}

fn log_and_return_error(error: Error) -> Error {
    engine_error!("barchart3d::Grid", "{}", error);
    error
}

/// Build one `BoxSpec` per grid cell from the first 16 records.
///
/// # Errors
///
/// - `Error::InsufficientRecords` when fewer than 16 records are supplied
/// - `Error::InvalidRecord` when a consumed record has no usable `age`, or
///   one whose height does not fit a positive finite `f32`
///
/// Records past the 16th are ignored.
pub fn build_grid(records: &[Record]) -> Result<Vec<BoxSpec>> {
    if records.len() < GRID_CELLS {
        return Err(log_and_return_error(Error::InsufficientRecords {
            expected: GRID_CELLS,
            actual: records.len(),
        }));
    }
    if records.len() > GRID_CELLS {
        engine_warn!("barchart3d::Grid",
            "{} records supplied, only the first {} are charted",
            records.len(), GRID_CELLS);
    }

    grid_cells()
        .zip(records.iter().enumerate())
        .map(|((grid_x, grid_z), (index, record))| {
            let age = record.checked_age(index).map_err(log_and_return_error)?;
            let height = (age / AGE_PER_HEIGHT_UNIT) as f32;
            if !height.is_finite() || height <= 0.0 {
                return Err(log_and_return_error(Error::InvalidRecord {
                    index,
                    reason: format!("age {} is out of range for a bar height", age),
                }));
            }

            engine_trace!("barchart3d::Grid",
                "cell ({}, {}) <- record {} (age {}, height {})",
                grid_x, grid_z, index, age, height);

            Ok(BoxSpec::new(grid_x, grid_z, height, grid_color(grid_z)))
        })
        .collect()
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
