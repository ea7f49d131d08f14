//! Fixed-point raycasting core
//!
//! Everything the per-frame hot path needs is precomputed once up front:
//! - a distance -> wall-height lookup (`WallDivTable`)
//! - per-angle, per-column ray step deltas (`DeltaTable`)
//!
//! The per-frame DDA traversal and column rasterizer then run on integer
//! math only, with no divisions.

mod fixed;
mod frame;
mod raster;
mod tables;
mod trace;

pub use fixed::*;
pub use frame::*;
pub use raster::*;
pub use tables::*;
pub use trace::*;

/// Fixed-point scale: one grid cell is FP units
pub const FP: i32 = 1024;
/// Full-turn angle domain
pub const ANGLE_STEPS: u16 = 1024;
/// Output columns per frame (the effective horizontal resolution)
pub const COLUMNS: usize = 64;
/// Cells per surface row
pub const PLANE_W: usize = 32;
/// Cell rows per surface
pub const PLANE_H: usize = 28;
/// Cells per surface
pub const PLANE_CELLS: usize = PLANE_W * PLANE_H;
/// Half the visible pixel span; heights at or above this fill the column
pub const FULL_HEIGHT: u16 = 112;
/// Depth shading bands
pub const DEPTH_BANDS: u16 = 8;

/// Tunable raycaster parameters.
///
/// The two reference builds of this renderer shipped different constants
/// (64 vs 128 angle slots, 6 vs 15 DDA steps) and neither set is canonical,
/// so both are runtime knobs with the low-variant defaults.
#[derive(Debug, Clone, Copy)]
pub struct CasterConfig {
    /// Delta-table rows covering one half turn (power of two)
    pub angle_slots: usize,
    /// DDA step budget per column
    pub step_count: u16,
}

impl Default for CasterConfig {
    fn default() -> Self {
        Self {
            angle_slots: 64,
            step_count: 6,
        }
    }
}
