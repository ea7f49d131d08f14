//! Interleaved plane buffer and vertical-run writes
//!
//! The renderer never touches pixels directly. It writes 16-bit cell
//! attributes into two 32x28-cell surfaces; even columns land on plane A,
//! odd columns on plane B, and the display compositor shifts plane B half
//! a cell so the surfaces interleave into 64 effective columns.

use super::{HitResult, WallDivTable, WallSide, DEPTH_BANDS, FP, FULL_HEIGHT, PLANE_CELLS, PLANE_H, PLANE_W};

/// Palette index position in a cell attribute
const PALETTE_SHIFT: u16 = 13;
/// Vertical-flip flag
const VFLIP: u16 = 1 << 12;
/// Pattern index bits
const PATTERN_MASK: u16 = 0x07ff;

/// One surface cell: pattern index, palette and flip flag packed in 16 bits.
///
/// Pattern `1 + band * 8 + blank` selects a column pattern for one of the
/// eight depth bands with `blank` empty row units at its top; pattern 0 is
/// background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellAttr(u16);

impl CellAttr {
    pub const EMPTY: CellAttr = CellAttr(0);

    /// Flat interior cell for a depth band
    pub fn band(palette: u8, band: u16) -> Self {
        CellAttr((1 + band * 8) | ((palette as u16) << PALETTE_SHIFT))
    }

    /// Edge cell: same pattern family with `blank` empty row units on top
    pub fn edge(palette: u8, band: u16, blank: u16) -> Self {
        CellAttr((1 + band * 8 + blank) | ((palette as u16) << PALETTE_SHIFT))
    }

    /// The same pattern drawn upside down; one stored pattern serves both
    /// the top and bottom wall edges.
    pub fn flipped(self) -> Self {
        CellAttr(self.0 | VFLIP)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_flipped(self) -> bool {
        self.0 & VFLIP != 0
    }

    pub fn palette(self) -> u8 {
        ((self.0 >> PALETTE_SHIFT) & 0x3) as u8
    }

    /// Depth band encoded in the pattern index (background cells are band 0)
    pub fn depth_band(self) -> u16 {
        (self.0 & PATTERN_MASK).saturating_sub(1) / 8
    }

    /// Empty row units at the top of the pattern
    pub fn blank_rows(self) -> u16 {
        (self.0 & PATTERN_MASK).saturating_sub(1) % 8
    }
}

/// The frame's output: two cell surfaces in one allocation.
///
/// Cleared at the top of every frame, fully written by the column loop,
/// then handed off; the core never reads it back.
pub struct PlaneBuffer {
    cells: Vec<CellAttr>,
}

impl PlaneBuffer {
    pub fn new() -> Self {
        Self {
            cells: vec![CellAttr::EMPTY; PLANE_CELLS * 2],
        }
    }

    /// Reset every cell to background
    pub fn clear(&mut self) {
        self.cells.fill(CellAttr::EMPTY);
    }

    /// Column -> (surface, tile offset) mapping for the interleave
    pub fn surface_for_column(col: usize) -> (usize, usize) {
        (col & 1, col >> 1)
    }

    /// One surface's cells, row-major (for the display handoff)
    pub fn plane(&self, idx: usize) -> &[CellAttr] {
        &self.cells[idx * PLANE_CELLS..(idx + 1) * PLANE_CELLS]
    }

    pub fn cell(&self, plane: usize, tx: usize, ty: usize) -> CellAttr {
        self.cells[plane * PLANE_CELLS + ty * PLANE_W + tx]
    }

    fn set(&mut self, plane: usize, tx: usize, ty: usize, attr: CellAttr) {
        self.cells[plane * PLANE_CELLS + ty * PLANE_W + tx] = attr;
    }
}

impl Default for PlaneBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth band for a scaled distance: 8 bands, nearest is brightest
pub fn depth_band(dist: u16) -> u16 {
    let d16 = (dist as u32 * 16 / FP as u32).min(15) as u16;
    (DEPTH_BANDS - 1) - d16 / 2
}

/// X-side and Y-side hits use different color families, and the struck
/// cell's parity alternates the shade within each family.
fn palette_for(hit: &HitResult) -> u8 {
    let parity = hit.parity as u8 * 2;
    match hit.side {
        WallSide::X => parity,
        WallSide::Y => 1 + parity,
    }
}

/// Rasterize one hit into its column: a full-span fill when the wall
/// reaches the whole visible span, otherwise an interior run bracketed by
/// two edge cells that share one flipped pattern. Each column is written
/// exactly once per frame.
pub fn draw_column(planes: &mut PlaneBuffer, wall_div: &WallDivTable, col: usize, hit: &HitResult) {
    let (plane, tx) = PlaneBuffer::surface_for_column(col);
    let palette = palette_for(hit);
    let band = depth_band(hit.dist);
    let body = CellAttr::band(palette, band);

    let height = wall_div.height(hit.dist) as u16;
    if height >= FULL_HEIGHT {
        for ty in 0..PLANE_H {
            planes.set(plane, tx, ty, body);
        }
        return;
    }

    // empty pixels above the slice, split into whole row units + remainder
    let margin = FULL_HEIGHT - height;
    let top = (margin / 8) as usize;
    let edge = CellAttr::edge(palette, band, margin & 7);

    for ty in top + 1..PLANE_H - 1 - top {
        planes.set(plane, tx, ty, body);
    }
    planes.set(plane, tx, top, edge);
    planes.set(plane, tx, PLANE_H - 1 - top, edge.flipped());
}
