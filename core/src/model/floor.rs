use serde::{Deserialize, Serialize};

use crate::prelude::{CoverageError, CoverageResult};

/// A physical level: display name plus the stable key its file paths derive from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    pub name: String,
    pub key: String,
}

impl Floor {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }
}

/// Immutable ordered floor listing, loaded once at startup.
#[derive(Debug, Clone)]
pub struct FloorRegistry {
    floors: Vec<Floor>,
}

impl FloorRegistry {
    /// Builds a registry, rejecting duplicate keys.
    pub fn from_floors(floors: Vec<Floor>) -> CoverageResult<Self> {
        for (index, floor) in floors.iter().enumerate() {
            if floors[..index].iter().any(|other| other.key == floor.key) {
                return Err(CoverageError::InvalidInput(format!(
                    "duplicate floor key {:?}",
                    floor.key
                )));
            }
        }
        Ok(Self { floors })
    }

    /// The deployed CN-4 / CN-1 tower listing.
    pub fn builtin() -> Self {
        let mut floors = Vec::new();
        for (tower, prefix, offset) in [("CN-4", "", 0usize), ("CN-1", "2", 9)] {
            floors.push(Floor::new(
                format!("Basement {tower}"),
                format!("basement{prefix}"),
            ));
            floors.push(Floor::new(
                format!("Ground Floor {tower}"),
                format!("ground{prefix}"),
            ));
            for level in 1..=9usize {
                let suffix = match level {
                    1 => "st",
                    2 => "nd",
                    3 => "rd",
                    _ => "th",
                };
                floors.push(Floor::new(
                    format!("{level}{suffix} Floor {tower}"),
                    format!("floor_{}", level + offset),
                ));
            }
        }
        Self { floors }
    }

    pub fn get(&self, key: &str) -> Option<&Floor> {
        self.floors.iter().find(|floor| floor.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Floor> {
        self.floors.iter()
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }
}
