use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::sync::Arc;

use crate::state::StateRef;

/// Write a serializable object (e.g. the decorated trades) to a pretty JSON file.
pub fn save_to_file<T: Serialize>(data: &T, path: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path))?;
    serde_json::to_writer_pretty(BufWriter::new(file), data)
        .with_context(|| format!("failed to write JSON to {}", path))
}

/// Read a deserializable object from a JSON file.
pub fn load_from_file<T: DeserializeOwned>(path: &str) -> Result<T> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse JSON in {}", path))
}

/// Load a state snapshot from a JSON file and wrap it for the selectors.
pub fn load_state(path: &str) -> Result<StateRef> {
    let value: serde_json::Value = load_from_file(path)?;
    Ok(Arc::new(value))
}
