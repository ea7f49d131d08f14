//! Frame orchestration
//!
//! One table build at startup, then a straight-line column loop per frame:
//! clear, trace, rasterize. Single-threaded and run-to-completion; the
//! buffer is only handed off once every column has been processed.

use super::{draw_column, CasterConfig, FrameRays, PlaneBuffer, RayTables, COLUMNS};
use crate::player::Player;
use crate::world::MapGrid;

/// Owns the immutable lookup tables and drives full frame renders.
pub struct Renderer {
    tables: RayTables,
    config: CasterConfig,
}

impl Renderer {
    /// Build every lookup table once; `render` never divides after this.
    pub fn new(config: CasterConfig) -> Self {
        let tables = RayTables::build(&config);
        Self { tables, config }
    }

    pub fn tables(&self) -> &RayTables {
        &self.tables
    }

    pub fn config(&self) -> &CasterConfig {
        &self.config
    }

    /// Render one frame into the plane buffer. Every column is either
    /// written by its hit or left at the cleared background.
    pub fn render(&self, grid: &MapGrid, player: &Player, out: &mut PlaneBuffer) {
        out.clear();
        let rays = FrameRays::new(&self.tables, grid, &self.config, player);
        for col in 0..COLUMNS {
            if let Some(hit) = rays.trace(col) {
                draw_column(out, &self.tables.wall_div, col, &hit);
            }
        }
    }
}
