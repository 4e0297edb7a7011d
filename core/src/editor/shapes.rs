use serde::{Deserialize, Serialize};

use crate::prelude::CoverageResult;

/// One object reported by the external drawing surface.
///
/// The surface supports more tools than this workflow consumes; anything
/// that is not a circle marker lands in the ignored catch-all variant so
/// newer surface versions keep decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CanvasShape {
    Circle { left: f64, top: f64, radius: f64 },
    #[serde(other)]
    Other,
}

/// Full dump of the drawing-surface state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanvasPayload {
    #[serde(default)]
    pub objects: Vec<CanvasShape>,
}

impl CanvasPayload {
    pub fn from_json(raw: &str) -> CoverageResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
