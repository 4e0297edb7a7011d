use anyhow::Context;
use rfidcore::model::FloorConfig;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads and validates a floor's persisted record.
///
/// Missing files, undecodable JSON, and records without `pixels_per_meter`
/// or `readers` all surface as load errors naming the path.
pub fn load_config(path: &Path) -> anyhow::Result<FloorConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading floor record {}", path.display()))?;
    let config: FloorConfig = serde_json::from_str(&contents)
        .with_context(|| format!("parsing floor record {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("validating floor record {}", path.display()))?;
    Ok(config)
}

/// Overwrites a floor's record, atomically from the caller's perspective.
///
/// The record is pretty-printed into a temp file next to the destination and
/// renamed over it, so a failed write never leaves a truncated sidecar.
pub fn save_config(path: &Path, config: &FloorConfig) -> anyhow::Result<()> {
    config
        .validate()
        .with_context(|| format!("refusing to save floor record {}", path.display()))?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("creating data directory {}", parent.display()))?;

    let serialized = serde_json::to_string_pretty(config).context("serializing floor record")?;
    let mut temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("creating temp file in {}", parent.display()))?;
    temp.write_all(serialized.as_bytes())
        .with_context(|| format!("writing floor record {}", path.display()))?;
    temp.persist(path)
        .with_context(|| format!("replacing floor record {}", path.display()))?;
    Ok(())
}
