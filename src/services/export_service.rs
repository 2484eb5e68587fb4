use std::path::Path;

use tracing::info;

use crate::models::Transaction;
use crate::utils::Result;

/// Serialize rows as a pretty-printed JSON array
pub fn rows_to_json(rows: &[&Transaction]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Write the rows to `path` as JSON; returns how many were written
pub fn write_rows_json(path: &Path, rows: &[&Transaction]) -> Result<usize> {
    std::fs::write(path, rows_to_json(rows)?)?;
    info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(rows.len())
}
