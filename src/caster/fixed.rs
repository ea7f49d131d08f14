//! Fixed-point scalar math
//!
//! All world coordinates, directions and distances are integers scaled by
//! `FP`. The `Fixed` newtype keeps that scale out of convention and inside
//! the type: plain add/sub work directly, multiplication rescales the
//! double-width product, and conversion to a grid coordinate truncates.
//! Nothing here can fault; angle inputs are masked into their domain.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::{ANGLE_STEPS, FP};

/// A real value scaled by `FP`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(FP);

    pub const fn from_int(v: i32) -> Self {
        Fixed(v * FP)
    }

    pub const fn from_raw(raw: i32) -> Self {
        Fixed(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Truncate to a plain integer (the containing grid coordinate)
    pub const fn to_int(self) -> i32 {
        self.0 / FP
    }

    /// Multiply two fixed-point values, rescaling the double-width product
    pub fn mul(self, other: Fixed) -> Fixed {
        Fixed(((self.0 as i64 * other.0 as i64) / FP as i64) as i32)
    }

    pub const fn abs(self) -> Fixed {
        Fixed(self.0.abs())
    }
}

impl Add for Fixed {
    type Output = Fixed;
    fn add(self, other: Fixed) -> Fixed {
        Fixed(self.0 + other.0)
    }
}

impl Sub for Fixed {
    type Output = Fixed;
    fn sub(self, other: Fixed) -> Fixed {
        Fixed(self.0 - other.0)
    }
}

impl Neg for Fixed {
    type Output = Fixed;
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, other: Fixed) {
        self.0 += other.0;
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, other: Fixed) {
        self.0 -= other.0;
    }
}

/// Full-turn sine table scaled to `FP`.
///
/// Built once at startup with host float math (the analogue of the console
/// SDK's ROM trig table); every per-frame lookup is a masked integer index.
/// The second half turn mirrors the first, so the antisymmetry
/// `sin(a + half) == -sin(a)` holds exactly.
pub struct SinTable {
    entries: Vec<i16>,
}

impl SinTable {
    pub fn new() -> Self {
        let half = ANGLE_STEPS as usize / 2;
        let mut entries = vec![0i16; ANGLE_STEPS as usize];
        for i in 0..half {
            let a = i as f32 / ANGLE_STEPS as f32 * std::f32::consts::TAU;
            let v = (a.sin() * FP as f32).round() as i16;
            entries[i] = v;
            entries[i + half] = -v;
        }
        Self { entries }
    }

    pub fn sin(&self, angle: u16) -> Fixed {
        Fixed::from_raw(self.entries[(angle & (ANGLE_STEPS - 1)) as usize] as i32)
    }

    pub fn cos(&self, angle: u16) -> Fixed {
        self.sin(angle.wrapping_add(ANGLE_STEPS / 4))
    }

    /// Heading direction pair for an angle: `(sin a, cos a)`
    pub fn dir_for_angle(&self, angle: u16) -> (Fixed, Fixed) {
        (self.sin(angle), self.cos(angle))
    }
}

impl Default for SinTable {
    fn default() -> Self {
        Self::new()
    }
}
