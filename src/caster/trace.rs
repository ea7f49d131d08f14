//! Per-column DDA traversal
//!
//! Each frame captures the player-derived invariants once (`FrameRays`),
//! then every column walks the grid one line crossing at a time: advance
//! whichever axis has the smaller accumulated side distance, step that
//! grid coordinate by the precomputed sign, test occupancy. The loop is
//! bounded by the step budget; a ray that exhausts it is background, not
//! an error.

use super::{CasterConfig, RayTables, ANGLE_STEPS, FP};
use crate::player::Player;
use crate::world::MapGrid;

/// Which grid-line family the ray crossed at the hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    X,
    Y,
}

/// Result of one column's traversal
#[derive(Debug, Clone, Copy)]
pub struct HitResult {
    pub side: WallSide,
    /// Perpendicular distance at the hit, in the scaled table domain
    pub dist: u16,
    /// Struck cell's row parity (X side) or column parity (Y side)
    pub parity: bool,
}

/// Per-frame traversal state, shared by all column traces.
///
/// The delta table only covers half a turn, so each axis carries a mirror
/// flag for headings in the opposite half; the stored ray-direction sign
/// flips under it.
pub struct FrameRays<'a> {
    tables: &'a RayTables,
    grid: &'a MapGrid,
    step_count: u16,
    slot: usize,
    mirror_x: bool,
    mirror_y: bool,
    map_x: i32,
    map_y: i32,
    /// Fixed-point offsets to the previous and next grid line, per axis
    frac_x: (u32, u32),
    frac_y: (u32, u32),
}

impl<'a> FrameRays<'a> {
    pub fn new(
        tables: &'a RayTables,
        grid: &'a MapGrid,
        config: &CasterConfig,
        player: &Player,
    ) -> Self {
        let angle = player.angle & (ANGLE_STEPS - 1);
        let half = ANGLE_STEPS / 2;
        let quarter = ANGLE_STEPS / 4;

        let map_x = player.pos_x.to_int();
        let map_y = player.pos_y.to_int();

        Self {
            tables,
            grid,
            step_count: config.step_count,
            slot: tables.deltas.slot_for(angle),
            mirror_x: angle & half != 0,
            mirror_y: angle.wrapping_add(quarter) & half != 0,
            map_x,
            map_y,
            frac_x: (
                (player.pos_x.raw() - map_x * FP) as u32,
                ((map_x + 1) * FP - player.pos_x.raw()) as u32,
            ),
            frac_y: (
                (player.pos_y.raw() - map_y * FP) as u32,
                ((map_y + 1) * FP - player.pos_y.raw()) as u32,
            ),
        }
    }

    /// Trace one column. `None` means background: either no occupied cell
    /// within the step budget, or a hit beyond the valid render distance.
    pub fn trace(&self, col: usize) -> Option<HitResult> {
        let entry = self.tables.deltas.column_deltas(self.slot, col);
        let delta_x = entry.x.step as u32;
        let delta_y = entry.y.step as u32;

        let x_neg = (entry.x.dir < 0) != self.mirror_x;
        let y_neg = (entry.y.dir < 0) != self.mirror_y;

        let (step_x, mut side_x) = if x_neg {
            (-1, self.frac_x.0 * delta_x / FP as u32)
        } else {
            (1, self.frac_x.1 * delta_x / FP as u32)
        };
        let (step_y, mut side_y) = if y_neg {
            (-1, self.frac_y.0 * delta_y / FP as u32)
        } else {
            (1, self.frac_y.1 * delta_y / FP as u32)
        };

        let mut map_x = self.map_x;
        let mut map_y = self.map_y;

        for _ in 0..self.step_count {
            if side_x < side_y {
                side_x += delta_x;
                map_x += step_x;
                if self.grid.is_wall(map_x, map_y) {
                    return accept(WallSide::X, side_x - delta_x, map_y);
                }
            } else {
                side_y += delta_y;
                map_y += step_y;
                if self.grid.is_wall(map_x, map_y) {
                    return accept(WallSide::Y, side_y - delta_y, map_x);
                }
            }
        }

        None
    }
}

/// The distance to the wall plane is the side distance *before* the final
/// increment; this off-by-one is load-bearing for wall alignment.
fn accept(side: WallSide, dist: u32, parity_coord: i32) -> Option<HitResult> {
    if dist >= FP as u32 {
        // beyond the lookup domain: too far to draw
        return None;
    }
    Some(HitResult {
        side,
        dist: dist as u16,
        parity: parity_coord & 1 == 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caster::COLUMNS;
    use crate::world::MAP_SIZE;

    fn bordered_grid(walls: &[(usize, usize)]) -> MapGrid {
        let mut cells = [[0u8; MAP_SIZE]; MAP_SIZE];
        for i in 0..MAP_SIZE {
            cells[0][i] = 1;
            cells[MAP_SIZE - 1][i] = 1;
            cells[i][0] = 1;
            cells[i][MAP_SIZE - 1] = 1;
        }
        for &(x, y) in walls {
            cells[y][x] = 1;
        }
        MapGrid { cells }
    }

    fn player_at_cell_center(tables: &RayTables, x: i32, y: i32, angle: u16) -> Player {
        let mut p = Player::spawn(&tables.sin, x, y, angle);
        p.pos_x += crate::caster::Fixed::from_raw(FP / 2);
        p.pos_y += crate::caster::Fixed::from_raw(FP / 2);
        p
    }

    #[test]
    fn south_facing_hit_lands_on_y_axis() {
        let config = CasterConfig::default();
        let tables = RayTables::build(&config);
        let grid = bordered_grid(&[(2, 4)]);
        let player = player_at_cell_center(&tables, 2, 2, 0);
        let rays = FrameRays::new(&tables, &grid, &config, &player);

        // center column looks straight ahead
        let hit = rays.trace(COLUMNS / 2).expect("wall ahead must hit");
        assert_eq!(hit.side, WallSide::Y);
        // 1.5 cells to the wall plane at one cell = FP / step_count units
        assert_eq!(hit.dist as u32, 3 * (FP as u32 / 6) / 2);
        // column parity of cell x = 2
        assert!(!hit.parity);
    }

    #[test]
    fn quarter_turn_flips_hit_axis_and_parity() {
        let config = CasterConfig::default();
        let tables = RayTables::build(&config);
        // same geometry rotated: wall east of the player, on an odd row
        let grid = bordered_grid(&[(4, 3)]);
        let player = player_at_cell_center(&tables, 2, 3, ANGLE_STEPS / 4);
        let rays = FrameRays::new(&tables, &grid, &config, &player);

        let hit = rays.trace(COLUMNS / 2).expect("wall ahead must hit");
        assert_eq!(hit.side, WallSide::X);
        assert_eq!(hit.dist as u32, 3 * (FP as u32 / 6) / 2);
        // row parity of cell y = 3
        assert!(hit.parity);
    }

    #[test]
    fn mirrored_heading_walks_the_other_way() {
        let config = CasterConfig::default();
        let tables = RayTables::build(&config);
        // walls north and south; facing north (a second-half-turn heading)
        let grid = bordered_grid(&[(5, 3), (5, 8)]);
        let player = player_at_cell_center(&tables, 5, 5, ANGLE_STEPS / 2);
        let rays = FrameRays::new(&tables, &grid, &config, &player);

        let hit = rays.trace(COLUMNS / 2).expect("wall behind the mirror");
        assert_eq!(hit.side, WallSide::Y);
        // the nearer wall is the northern one, 1.5 cells up
        assert_eq!(hit.dist as u32, 3 * (FP as u32 / 6) / 2);
    }

    #[test]
    fn axis_aligned_ray_never_steps_sideways() {
        let config = CasterConfig::default();
        let tables = RayTables::build(&config);
        // a full wall row ahead: every in-range hit must cross a Y line,
        // even for the columns whose X component saturates
        let walls: Vec<(usize, usize)> = (1..MAP_SIZE - 1).map(|x| (x, 4)).collect();
        let grid = bordered_grid(&walls);
        let player = player_at_cell_center(&tables, 8, 2, 0);
        let rays = FrameRays::new(&tables, &grid, &config, &player);

        for col in 0..COLUMNS {
            if let Some(hit) = rays.trace(col) {
                assert_eq!(hit.side, WallSide::Y);
            }
        }
        // the straight-ahead column is in range and does hit
        assert!(rays.trace(COLUMNS / 2).is_some());
    }

    #[test]
    fn open_space_exhausts_the_budget_quietly() {
        let config = CasterConfig::default();
        let tables = RayTables::build(&config);
        let grid = bordered_grid(&[]);
        let player = player_at_cell_center(&tables, 8, 8, 0);
        let rays = FrameRays::new(&tables, &grid, &config, &player);

        for col in 0..COLUMNS {
            assert!(rays.trace(col).is_none());
        }
    }

    #[test]
    fn every_heading_terminates_within_budget() {
        let config = CasterConfig::default();
        let tables = RayTables::build(&config);
        let grid = MapGrid::builtin();
        for angle in (0..ANGLE_STEPS).step_by(32) {
            let player = player_at_cell_center(&tables, 2, 2, angle);
            let rays = FrameRays::new(&tables, &grid, &config, &player);
            for col in 0..COLUMNS {
                // bounded by construction; just must not panic or loop
                let _ = rays.trace(col);
            }
        }
    }
}
