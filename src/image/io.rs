//! I/O helpers for rendered canvases and JSON.
//!
//! - `save_canvas`: write an RGB canvas; the format follows the extension.
//! - `read_json_file`: deserialize a value (e.g. a segmentation snapshot).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::Canvas;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Save an RGB canvas, creating parent directories.
pub fn save_canvas(canvas: &Canvas, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    canvas
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Read and deserialize a JSON document from `path`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
