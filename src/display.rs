//! Plane compositing and the shade-ramp "tile set"
//!
//! The render core writes cell attributes, not pixels. This module owns
//! the one-time shade ramp (the uploaded tile graphics of the original
//! hardware target) and expands the two cell planes into one RGBA image.
//! Plane B is shifted half a cell to the right, so the two
//! half-resolution surfaces interleave into 64 four-pixel columns.

use crate::caster::{CellAttr, PlaneBuffer, PLANE_H, PLANE_W};

/// Output pixel dimensions
pub const SCREEN_W: usize = 256;
pub const SCREEN_H: usize = 224;

/// Pixel width of one rendered column
pub const COLUMN_PX: usize = 4;
/// Pixel height of one cell row unit
const ROW_PX: usize = 8;
/// Pixel width of one plane cell (a column plus the other plane's slot)
const CELL_PX: usize = 2 * COLUMN_PX;

/// Background color behind and between walls
const BACKGROUND: [u8; 3] = [14, 12, 28];

/// Four palettes of nine brightness levels each: the flat-fill shade ramp
/// the depth bands index into. Level 0 is the background; level 8 the
/// brightest. Built once at startup, read-only afterwards.
pub struct ShadeRamp {
    palettes: [[[u8; 3]; 9]; 4],
}

impl ShadeRamp {
    /// X-side walls get the cool family, Y-side the warm one; the parity
    /// variants are dimmer so adjacent wall blocks stay distinguishable.
    pub fn new() -> Self {
        let families: [(u8, u8, u8); 4] = [
            (110, 130, 230), // X side, even rows
            (230, 140, 80),  // Y side, even columns
            (80, 100, 190),  // X side, odd rows
            (190, 110, 60),  // Y side, odd columns
        ];

        let mut palettes = [[[0u8; 3]; 9]; 4];
        for (p, &(r, g, b)) in families.iter().enumerate() {
            palettes[p][0] = BACKGROUND;
            for level in 1..9 {
                let scale = |c: u8| (c as u32 * level as u32 / 8) as u8;
                palettes[p][level as usize] = [scale(r), scale(g), scale(b)];
            }
        }
        Self { palettes }
    }

    fn color(&self, palette: u8, level: u16) -> [u8; 3] {
        self.palettes[palette as usize][level.min(8) as usize]
    }
}

impl Default for ShadeRamp {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand both cell planes into the RGBA output buffer
/// (`SCREEN_W * SCREEN_H * 4` bytes).
pub fn composite(planes: &PlaneBuffer, ramp: &ShadeRamp, pixels: &mut [u8]) {
    debug_assert_eq!(pixels.len(), SCREEN_W * SCREEN_H * 4);

    for px in pixels.chunks_exact_mut(4) {
        px[..3].copy_from_slice(&BACKGROUND);
        px[3] = 255;
    }

    for plane in 0..2 {
        let x_off = plane * COLUMN_PX;
        for ty in 0..PLANE_H {
            for tx in 0..PLANE_W {
                let attr = planes.cell(plane, tx, ty);
                if attr.is_empty() {
                    continue;
                }
                blit_cell(attr, ramp, tx * CELL_PX + x_off, ty * ROW_PX, pixels);
            }
        }
    }
}

fn blit_cell(attr: CellAttr, ramp: &ShadeRamp, x0: usize, y0: usize, pixels: &mut [u8]) {
    let band = attr.depth_band();
    let blank = attr.blank_rows() as usize;
    let palette = attr.palette();
    let flipped = attr.is_flipped();

    for row in 0..ROW_PX {
        let src = if flipped { ROW_PX - 1 - row } else { row };
        if src < blank {
            continue;
        }
        let y = y0 + row;
        for px in 0..COLUMN_PX {
            // alternate band+1 / band shades: the dither that fakes a
            // finer gradient on a four-pixel column
            let level = if px % 2 == 0 { band + 1 } else { band };
            let color = ramp.color(palette, level);
            let idx = (y * SCREEN_W + x0 + px) * 4;
            pixels[idx..idx + 3].copy_from_slice(&color);
            pixels[idx + 3] = 255;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caster::{draw_column, HitResult, WallDivTable, WallSide};

    fn rgb_at(pixels: &[u8], x: usize, y: usize) -> [u8; 3] {
        let idx = (y * SCREEN_W + x) * 4;
        [pixels[idx], pixels[idx + 1], pixels[idx + 2]]
    }

    fn near_hit() -> HitResult {
        HitResult {
            side: WallSide::Y,
            dist: 0,
            parity: false,
        }
    }

    #[test]
    fn empty_planes_composite_to_background() {
        let planes = PlaneBuffer::new();
        let ramp = ShadeRamp::new();
        let mut pixels = vec![0u8; SCREEN_W * SCREEN_H * 4];
        composite(&planes, &ramp, &mut pixels);

        assert_eq!(rgb_at(&pixels, 0, 0), BACKGROUND);
        assert_eq!(rgb_at(&pixels, SCREEN_W - 1, SCREEN_H - 1), BACKGROUND);
    }

    #[test]
    fn odd_columns_land_half_a_cell_right() {
        let wall_div = WallDivTable::build();
        let ramp = ShadeRamp::new();
        let mut planes = PlaneBuffer::new();
        draw_column(&mut planes, &wall_div, 1, &near_hit());

        let mut pixels = vec![0u8; SCREEN_W * SCREEN_H * 4];
        composite(&planes, &ramp, &mut pixels);

        // column 1 is plane B tile 0: pixels 4..8, not 0..4
        assert_eq!(rgb_at(&pixels, 0, 0), BACKGROUND);
        assert_ne!(rgb_at(&pixels, COLUMN_PX, 0), BACKGROUND);
        assert_eq!(rgb_at(&pixels, 2 * COLUMN_PX, 0), BACKGROUND);
    }

    #[test]
    fn dither_alternates_adjacent_shades() {
        let wall_div = WallDivTable::build();
        let ramp = ShadeRamp::new();
        let mut planes = PlaneBuffer::new();
        draw_column(&mut planes, &wall_div, 0, &near_hit());

        let mut pixels = vec![0u8; SCREEN_W * SCREEN_H * 4];
        composite(&planes, &ramp, &mut pixels);

        let bright = rgb_at(&pixels, 0, 100);
        let dim = rgb_at(&pixels, 1, 100);
        assert_ne!(bright, dim);
        assert_eq!(rgb_at(&pixels, 2, 100), bright);
        assert_eq!(rgb_at(&pixels, 3, 100), dim);
    }

    #[test]
    fn flipped_edge_mirrors_its_blank_rows() {
        let wall_div = WallDivTable::build();
        let ramp = ShadeRamp::new();
        let mut planes = PlaneBuffer::new();
        // height 100: one blank row unit plus a 4-pixel edge remainder
        draw_column(&mut planes, &wall_div, 0, &HitResult {
            side: WallSide::Y,
            dist: 54,
            parity: false,
        });

        let mut pixels = vec![0u8; SCREEN_W * SCREEN_H * 4];
        composite(&planes, &ramp, &mut pixels);

        // top edge cell (row unit 1): first 4 pixel rows blank, rest filled
        assert_eq!(rgb_at(&pixels, 0, 8), BACKGROUND);
        assert_ne!(rgb_at(&pixels, 0, 12), BACKGROUND);
        // bottom edge cell (row unit 26): mirrored, filled then blank
        assert_ne!(rgb_at(&pixels, 0, 26 * 8 + 3), BACKGROUND);
        assert_eq!(rgb_at(&pixels, 0, 26 * 8 + 4), BACKGROUND);
    }
}
