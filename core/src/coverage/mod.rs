pub mod field;

pub use field::{CoverageModel, DEFAULT_READ_RANGE_M};
