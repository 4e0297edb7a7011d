use serde::{Deserialize, Serialize};

use crate::prelude::{CoverageError, CoverageResult};

/// A reader location in canonical full-resolution image pixels.
///
/// Identity is positional: readers carry no persisted id and display labels
/// are derived from the index in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderPosition {
    pub x: u32,
    pub y: u32,
}

impl ReaderPosition {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Display label for the reader at `index`, never persisted.
    pub fn label(index: usize) -> String {
        format!("R{}", index + 1)
    }
}

/// Persisted per-floor record: the physical scale plus the reader list.
///
/// Saves overwrite the record wholesale; there are no partial updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorConfig {
    pub pixels_per_meter: f64,
    pub readers: Vec<ReaderPosition>,
}

impl FloorConfig {
    pub fn new(pixels_per_meter: f64, readers: Vec<ReaderPosition>) -> Self {
        Self {
            pixels_per_meter,
            readers,
        }
    }

    /// The scale factor must be positive before any field computation or save.
    pub fn validate(&self) -> CoverageResult<()> {
        if !(self.pixels_per_meter > 0.0) {
            return Err(CoverageError::InvalidScale(self.pixels_per_meter));
        }
        Ok(())
    }
}
