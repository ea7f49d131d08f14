//! Grid world data
//!
//! The static occupancy map the tracer walks, plus its on-disk format.

mod io;
mod map;

pub use io::*;
pub use map::*;
