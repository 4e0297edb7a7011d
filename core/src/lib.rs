//! Coverage-field and coordinate-mapping core for the RFID floor platform.
//!
//! The modules split the estimation model from the editing session: the
//! coverage model turns a persisted reader layout into a dense signal field
//! over the floor image, while the editor maps drawing-surface annotations
//! back to canonical full-resolution coordinates.

pub mod coverage;
pub mod editor;
pub mod model;
pub mod prelude;
pub mod telemetry;

pub use prelude::{CoverageError, CoverageResult};
