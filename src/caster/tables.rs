//! One-time table precomputation
//!
//! Both tables exist to keep division out of the per-frame path: the wall
//! projection pays its `O(FP)` divisions once, and the delta table pays one
//! division per (angle, column) pair. After `RayTables::build` everything
//! is immutable and shared read-only by all frames.

use super::{CasterConfig, SinTable, ANGLE_STEPS, COLUMNS, FP};

/// Projection constant for wall heights
pub const PROJECTION_K: u32 = 85;
/// Per-column width divisor in the projection
pub const COLUMN_DIVISOR: u32 = 16;

/// Distance -> wall-screen-height lookup.
///
/// Indexed by a scaled fixed-point distance in `[0, FP)`; heights are
/// monotonically non-increasing and saturate at `u8::MAX` for very small
/// distances.
pub struct WallDivTable {
    heights: Vec<u8>,
}

impl WallDivTable {
    pub fn build() -> Self {
        let mut heights = vec![0u8; FP as usize];
        for (i, h) in heights.iter_mut().enumerate() {
            let v = PROJECTION_K * FP as u32 / (i as u32 * COLUMN_DIVISOR + 1);
            *h = v.min(u8::MAX as u32) as u8;
        }
        Self { heights }
    }

    /// Wall height for a scaled distance; out-of-domain indices clamp
    pub fn height(&self, dist: u16) -> u8 {
        self.heights[(dist as usize).min(FP as usize - 1)]
    }
}

/// Step delta and ray direction for one (angle, column) pair on one axis
#[derive(Debug, Clone, Copy, Default)]
pub struct DeltaCell {
    /// Scaled distance advanced per grid-line crossing
    pub step: u16,
    /// Signed ray-direction component; only its sign steers the traversal
    pub dir: i16,
}

/// Both-axis view of the delta table for one column
#[derive(Debug, Clone, Copy)]
pub struct DeltaEntry {
    pub x: DeltaCell,
    pub y: DeltaCell,
}

/// Per-angle, per-column ray step deltas.
///
/// Rows cover one half turn: the opposite heading has identical magnitudes
/// with only the step sign flipped, and the orthogonal axis of a heading is
/// the row a quarter turn away. Each row sweeps the ray direction linearly
/// from `dx + dy` to `dx - dy`, the two edges of the 90-degree view.
pub struct DeltaTable {
    rows: Vec<[DeltaCell; COLUMNS]>,
    slots: usize,
}

impl DeltaTable {
    pub fn build(config: &CasterConfig, sin: &SinTable) -> Self {
        let slots = config.angle_slots;
        let half_turn = ANGLE_STEPS / 2;
        let mut rows = Vec::with_capacity(slots);

        for i in 0..slots {
            let a = i as u16 * (half_turn / slots as u16);
            let (dx, dy) = sin.dir_for_angle(a);

            let first = dx.raw() + dy.raw();
            let last = dx.raw() - dy.raw();
            let per_column = (last - first) / COLUMNS as i32;

            let mut row = [DeltaCell::default(); COLUMNS];
            let mut ray_dir = first;
            for cell in row.iter_mut() {
                // a near-zero component saturates instead of faulting
                let divisor = ray_dir.unsigned_abs().max(1);
                let d = ((FP as u32 * FP as u32) / divisor).min(u16::MAX as u32);
                cell.step = (d / config.step_count as u32) as u16;
                cell.dir = ray_dir as i16;
                ray_dir += per_column;
            }
            rows.push(row);
        }

        Self { rows, slots }
    }

    /// Half-turn slot index for a full-domain angle
    pub fn slot_for(&self, angle: u16) -> usize {
        let per_slot = (ANGLE_STEPS / 2) as usize / self.slots;
        ((angle & (ANGLE_STEPS - 1)) as usize / per_slot) & (self.slots - 1)
    }

    /// Slot of the orthogonal axis, a quarter turn ahead
    pub fn orthogonal(&self, slot: usize) -> usize {
        (slot + self.slots / 2) & (self.slots - 1)
    }

    pub fn cell(&self, slot: usize, col: usize) -> DeltaCell {
        self.rows[slot][col]
    }

    /// Assemble the per-column entry for both axes of a heading
    pub fn column_deltas(&self, slot: usize, col: usize) -> DeltaEntry {
        DeltaEntry {
            x: self.cell(slot, col),
            y: self.cell(self.orthogonal(slot), col),
        }
    }
}

/// All precomputed state, built once and passed by shared reference into
/// the per-frame tracer. No globals, no locking: no writer ever runs
/// concurrently with a reader.
pub struct RayTables {
    pub sin: SinTable,
    pub wall_div: WallDivTable,
    pub deltas: DeltaTable,
}

impl RayTables {
    pub fn build(config: &CasterConfig) -> Self {
        let sin = SinTable::new();
        let wall_div = WallDivTable::build();
        let deltas = DeltaTable::build(config, &sin);
        Self {
            sin,
            wall_div,
            deltas,
        }
    }
}
