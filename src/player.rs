//! Player state and per-frame movement
//!
//! Movement, rotation and wall collision all run once per frame before
//! any ray is traced; the render core only ever reads this.

use crate::caster::{Fixed, SinTable, ANGLE_STEPS, FP};
use crate::world::MapGrid;

/// Rotation per frame, in angle units
const TURN_SPEED: u16 = 8;
/// Movement speed divisor applied to the direction vector
const MOVE_DIVISOR: i32 = 24;
/// Closest approach to a wall face, in fixed units
const WALL_MARGIN: i32 = FP / 4;

/// Position and heading in fixed-point world units
pub struct Player {
    pub pos_x: Fixed,
    pub pos_y: Fixed,
    pub dir_x: Fixed,
    pub dir_y: Fixed,
    pub angle: u16,
}

impl Player {
    /// Spawn at a grid cell with a heading
    pub fn spawn(sin: &SinTable, x: i32, y: i32, angle: u16) -> Self {
        let (dir_x, dir_y) = sin.dir_for_angle(angle);
        Self {
            pos_x: Fixed::from_int(x),
            pos_y: Fixed::from_int(y),
            dir_x,
            dir_y,
            angle,
        }
    }

    /// Move along the heading (or against it), clamped against the
    /// neighbouring cells so the player never enters a wall.
    pub fn advance(&mut self, grid: &MapGrid, forward: bool) {
        let mut dx = self.dir_x.raw() / MOVE_DIVISOR;
        let mut dy = self.dir_y.raw() / MOVE_DIVISOR;
        if !forward {
            dx = -dx;
            dy = -dy;
        }

        let x = self.pos_x.to_int();
        let y = self.pos_y.to_int();
        self.pos_x = Fixed::from_raw(self.pos_x.raw() + dx);
        self.pos_y = Fixed::from_raw(self.pos_y.raw() + dy);

        if dx > 0 {
            if grid.is_wall(x + 1, y) {
                self.pos_x = self.pos_x.min(Fixed::from_raw((x + 1) * FP - WALL_MARGIN));
            }
        } else if x == 0 || grid.is_wall(x - 1, y) {
            self.pos_x = self.pos_x.max(Fixed::from_raw(x * FP + WALL_MARGIN));
        }

        // re-read the cell after the X clamp before resolving Y
        let x = self.pos_x.to_int();
        if dy > 0 {
            if grid.is_wall(x, y + 1) {
                self.pos_y = self.pos_y.min(Fixed::from_raw((y + 1) * FP - WALL_MARGIN));
            }
        } else if y == 0 || grid.is_wall(x, y - 1) {
            self.pos_y = self.pos_y.max(Fixed::from_raw(y * FP + WALL_MARGIN));
        }
    }

    /// Rotate by one turn step and refresh the direction pair
    pub fn turn(&mut self, sin: &SinTable, left: bool) {
        self.angle = if left {
            self.angle.wrapping_add(TURN_SPEED)
        } else {
            self.angle.wrapping_sub(TURN_SPEED)
        } & (ANGLE_STEPS - 1);
        let (dx, dy) = sin.dir_for_angle(self.angle);
        self.dir_x = dx;
        self.dir_y = dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_wraps_and_updates_direction() {
        let sin = SinTable::new();
        let mut p = Player::spawn(&sin, 2, 2, 0);

        p.turn(&sin, false);
        assert_eq!(p.angle, ANGLE_STEPS - TURN_SPEED);
        assert!(p.dir_x.raw() < 0);

        p.turn(&sin, true);
        assert_eq!(p.angle, 0);
        assert_eq!(p.dir_x, Fixed::ZERO);
        assert_eq!(p.dir_y, Fixed::ONE);
    }

    #[test]
    fn advance_moves_by_a_fraction_of_the_direction() {
        let sin = SinTable::new();
        let grid = MapGrid::builtin();
        let mut p = Player::spawn(&sin, 8, 8, 0);
        let before = p.pos_y;

        p.advance(&grid, true);
        assert_eq!(p.pos_y.raw() - before.raw(), FP / MOVE_DIVISOR);
        assert_eq!(p.pos_x, Fixed::from_int(8));
    }

    #[test]
    fn walls_stop_the_player_with_a_margin() {
        let sin = SinTable::new();
        let grid = MapGrid::builtin();
        // cell (2,2) is open, (3,2) is a wall; face east and push
        let mut p = Player::spawn(&sin, 2, 2, ANGLE_STEPS / 4);
        p.pos_x += Fixed::from_raw(FP / 2);
        p.pos_y += Fixed::from_raw(FP / 2);

        for _ in 0..100 {
            p.advance(&grid, true);
        }
        assert_eq!(p.pos_x, Fixed::from_raw(3 * FP - WALL_MARGIN));
        assert_eq!(p.pos_x.to_int(), 2);
    }

    #[test]
    fn backing_up_reverses_the_motion() {
        let sin = SinTable::new();
        let grid = MapGrid::builtin();
        let mut p = Player::spawn(&sin, 8, 8, 0);
        p.advance(&grid, true);
        p.advance(&grid, false);
        assert_eq!(p.pos_y, Fixed::from_int(8));
    }
}
