use anyhow::Context;
use rfidcore::model::{Floor, FloorRegistry};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RegistryFile {
    floors: Vec<Floor>,
}

/// Loads a replacement floor registry from YAML.
pub fn load_registry<P: AsRef<Path>>(path: P) -> anyhow::Result<FloorRegistry> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading floor registry {}", path_ref.display()))?;
    let parsed: RegistryFile = serde_yaml::from_str(&contents)
        .with_context(|| format!("parsing floor registry {}", path_ref.display()))?;
    let registry = FloorRegistry::from_floors(parsed.floors)
        .with_context(|| format!("validating floor registry {}", path_ref.display()))?;
    Ok(registry)
}
