//! Retrocaster: Mega Drive-style fixed-point raycasting engine
//!
//! A first-person view of a 2D grid world, rendered the way the 16-bit
//! console original did it:
//! - Integer-only fixed-point math in the per-frame path
//! - Precomputed ray-step and wall-height tables (no runtime division)
//! - Two interleaved half-resolution surfaces composited with a
//!   half-cell offset into 64 effective columns
//! - An 8-band dithered depth gradient instead of real lighting

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod caster;
pub mod display;
pub mod player;
pub mod world;
