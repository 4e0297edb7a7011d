/// Common error type for core operations.
#[derive(thiserror::Error, Debug)]
pub enum CoverageError {
    #[error("invalid scale: pixels_per_meter must be positive, got {0}")]
    InvalidScale(f64),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("malformed annotation payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

pub type CoverageResult<T> = Result<T, CoverageError>;

pub use crate::coverage::CoverageModel;
pub use crate::editor::{CanvasPayload, CanvasShape, DisplayScale, EditorSession};
pub use crate::model::{Floor, FloorConfig, FloorRegistry, ReaderPosition};
