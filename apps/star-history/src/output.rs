//! # Output Module
//!
//! Writes the snapshot document to disk: parent directories created as
//! needed, pretty-printed JSON, any prior file overwritten.

use crate::error::AppError;
use star_history_core::StarHistory;
use std::path::Path;

/// Serialize the snapshot to `path`, creating parent directories.
///
/// Overwrites any existing file at that path. The write happens only
/// after a fully successful fetch — a failed run never leaves a
/// partial file behind.
pub fn write_snapshot(path: &Path, snapshot: &StarHistory) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Io(format!("Create output directory {:?}: {}", parent, e))
            })?;
        }
    }

    let data = serde_json::to_vec_pretty(snapshot)
        .map_err(|e| AppError::Serialization(e.to_string()))?;

    std::fs::write(path, &data)
        .map_err(|e| AppError::Io(format!("Write file {:?}: {}", path, e)))?;

    tracing::info!("wrote {} bytes to {:?}", data.len(), path);

    Ok(())
}
