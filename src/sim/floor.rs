//! Floor layout for the built-in level
//!
//! Which cells count as standing floor depends on the cube's pose: a lying
//! cube straddles two cells, so its rows live on offset coordinates. The
//! intervals are hand-placed level data, not derived from a formula.

use super::state::Orientation;
use crate::grid_eq;

/// One row of standing floor: every x in [xmin, xmax] at this z is safe
#[derive(Debug, Clone, Copy)]
pub struct FloorRow {
    pub z: f32,
    pub xmin: f32,
    pub xmax: f32,
}

const fn row(z: f32, xmin: f32, xmax: f32) -> FloorRow {
    FloorRow { z, xmin, xmax }
}

/// Safe rows while standing upright
const UPRIGHT_ROWS: [FloorRow; 6] = [
    row(0.0, 0.0, 2.0),
    row(1.0, 0.0, 5.0),
    row(2.0, 0.0, 8.0),
    row(3.0, 1.0, 9.0),
    row(4.0, 5.0, 9.0),
    row(5.0, 6.0, 8.0),
];

/// Safe rows while lying along z; the footprint center sits between cells
const LYING_Z_ROWS: [FloorRow; 5] = [
    row(0.5, 0.0, 2.0),
    row(1.5, 0.0, 5.0),
    row(2.5, 1.0, 8.0),
    row(3.5, 5.0, 9.0),
    row(4.5, 6.0, 8.0),
];

/// Safe rows while lying along x; the x bounds sit between cells
const LYING_X_ROWS: [FloorRow; 6] = [
    row(0.0, 0.5, 1.5),
    row(1.0, 0.5, 4.5),
    row(2.0, 0.5, 7.5),
    row(3.0, 1.5, 8.5),
    row(4.0, 5.5, 8.5),
    row(5.0, 6.5, 7.5),
];

/// The validity rows consulted for a pose
pub fn rows_for(orientation: Orientation) -> &'static [FloorRow] {
    match orientation {
        Orientation::Upright => &UPRIGHT_ROWS,
        Orientation::LyingAlongZ => &LYING_Z_ROWS,
        Orientation::LyingAlongX => &LYING_X_ROWS,
    }
}

/// Whether the cube stands on floor at (x, z) in the given pose.
///
/// A z with no matching row is off-floor, same as an x outside the row's
/// interval - there is no error case, only falling.
pub fn is_on_floor(orientation: Orientation, x: f32, z: f32) -> bool {
    rows_for(orientation)
        .iter()
        .any(|r| grid_eq(z, r.z) && x >= r.xmin && x <= r.xmax)
}
