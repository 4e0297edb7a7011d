use crate::editor::scale::DisplayScale;
use crate::editor::shapes::{CanvasPayload, CanvasShape};
use crate::model::{FloorConfig, ReaderPosition};
use crate::prelude::CoverageResult;

/// In-memory state for one edit interaction over a single floor.
///
/// The working list is rebuilt on every ingest and replaces the persisted
/// list wholesale on commit; readers have no identity beyond their position
/// in the sequence.
#[derive(Debug, Clone)]
pub struct EditorSession {
    scale: DisplayScale,
    readers: Vec<ReaderPosition>,
}

impl EditorSession {
    pub fn new(width: u32, height: u32, max_display_width: u32) -> Self {
        Self {
            scale: DisplayScale::fit(width, height, max_display_width),
            readers: Vec::new(),
        }
    }

    pub fn scale(&self) -> &DisplayScale {
        &self.scale
    }

    /// Replaces the working list with the circle markers from a surface dump,
    /// keeping their original relative order.
    ///
    /// A circle reports its bounding-box corner; the center sits one radius in
    /// on both axes. Mapped coordinates truncate toward zero.
    pub fn ingest(&mut self, shapes: &[CanvasShape]) {
        let scale = self.scale;
        self.readers = shapes
            .iter()
            .filter_map(|shape| match *shape {
                CanvasShape::Circle { left, top, radius } => {
                    let (x, y) = scale.to_canonical(left + radius, top + radius);
                    Some(ReaderPosition::new(x as u32, y as u32))
                }
                CanvasShape::Other => None,
            })
            .collect();
    }

    pub fn ingest_payload(&mut self, payload: &CanvasPayload) {
        self.ingest(&payload.objects);
    }

    /// Read-only snapshot of the working list.
    pub fn readers(&self) -> &[ReaderPosition] {
        &self.readers
    }

    /// Commit value for a full-replace save of the floor's record.
    pub fn to_config(&self, pixels_per_meter: f64) -> CoverageResult<FloorConfig> {
        let config = FloorConfig::new(pixels_per_meter, self.readers.clone());
        config.validate()?;
        Ok(config)
    }
}
