//! The static occupancy grid

use serde::{Deserialize, Serialize};

/// Map edge length in cells
pub const MAP_SIZE: usize = 16;

/// Fixed-size occupancy grid: 0 = empty, nonzero = wall.
///
/// The struck cell's parity (row for X-side hits, column for Y-side) picks
/// the alternating wall shade, so adjacent wall blocks read as distinct.
/// Immutable during play; the tracer only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapGrid {
    pub cells: [[u8; MAP_SIZE]; MAP_SIZE],
}

impl MapGrid {
    /// The sample maze, rimmed by solid walls
    pub fn builtin() -> Self {
        Self {
            cells: [
                [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
                [1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
                [1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
                [1, 0, 0, 1, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 1],
                [1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 1],
                [1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1],
                [1, 0, 1, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 1],
                [1, 0, 1, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1],
                [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1],
                [1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 1, 0, 1],
                [1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1],
                [1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 1],
                [1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1],
                [1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1],
                [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1],
                [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            ],
        }
    }

    pub fn at(&self, x: i32, y: i32) -> u8 {
        self.cells[y as usize][x as usize]
    }

    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.at(x, y) != 0
    }

    /// The DDA stays in bounds only because the rim is solid: any path
    /// from an interior cell stops at the border before leaving the grid.
    /// Map loading rejects grids that fail this.
    pub fn has_solid_perimeter(&self) -> bool {
        (0..MAP_SIZE).all(|i| {
            self.cells[0][i] != 0
                && self.cells[MAP_SIZE - 1][i] != 0
                && self.cells[i][0] != 0
                && self.cells[i][MAP_SIZE - 1] != 0
        })
    }
}
