pub mod config;
pub mod floor;

pub use config::{FloorConfig, ReaderPosition};
pub use floor::{Floor, FloorRegistry};
