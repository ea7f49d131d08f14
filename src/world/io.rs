//! Map loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-editable map files.

use std::fs;
use std::path::Path;

use super::MapGrid;

/// Error type for map loading
#[derive(Debug)]
pub enum MapError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    /// The grid violates a structural precondition of the renderer
    Invalid(&'static str),
}

impl From<std::io::Error> for MapError {
    fn from(e: std::io::Error) -> Self {
        MapError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for MapError {
    fn from(e: ron::error::SpannedError) -> Self {
        MapError::ParseError(e)
    }
}

impl From<ron::Error> for MapError {
    fn from(e: ron::Error) -> Self {
        MapError::SerializeError(e)
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::IoError(e) => write!(f, "IO error: {}", e),
            MapError::ParseError(e) => write!(f, "Parse error: {}", e),
            MapError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            MapError::Invalid(msg) => write!(f, "Invalid map: {}", msg),
        }
    }
}

/// Load a map from a RON file
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<MapGrid, MapError> {
    let contents = fs::read_to_string(path)?;
    load_map_from_str(&contents)
}

/// Load a map from a RON string (for embedded maps or testing).
///
/// An open perimeter would let the DDA walk off the grid, so such maps
/// are rejected here rather than checked per ray.
pub fn load_map_from_str(s: &str) -> Result<MapGrid, MapError> {
    let map: MapGrid = ron::from_str(s)?;
    if !map.has_solid_perimeter() {
        return Err(MapError::Invalid("perimeter must be solid"));
    }
    Ok(map)
}

/// Save a map to a RON file
pub fn save_map<P: AsRef<Path>>(map: &MapGrid, path: P) -> Result<(), MapError> {
    let config = ron::ser::PrettyConfig::new().indentor("  ".to_string());
    let contents = ron::ser::to_string_pretty(map, config)?;
    fs::write(path, contents)?;
    Ok(())
}
