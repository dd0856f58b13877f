pub mod builtin;
pub mod schema;

use crate::error::ExtractError;
use schema::{ColumnKind, FormatDef};
use std::path::Path;

/// Load a format registry from a JSON file.
pub fn load_formats(path: &Path) -> Result<Vec<FormatDef>, ExtractError> {
    let content = std::fs::read_to_string(path).map_err(|e| ExtractError::FormatsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let formats: Vec<FormatDef> =
        serde_json::from_str(&content).map_err(|e| ExtractError::FormatsLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_formats(&formats)?;
    Ok(formats)
}

/// Load a format registry, degrading to an empty one when the source is
/// absent or malformed. Extraction against an empty registry fails later
/// with `NoFormat`, so the failure is deferred rather than swallowed.
pub fn load_formats_or_empty(path: &Path) -> Vec<FormatDef> {
    load_formats(path).unwrap_or_default()
}

/// Parse a format registry from a JSON string.
pub fn parse_formats_str(json: &str) -> Result<Vec<FormatDef>, ExtractError> {
    let formats: Vec<FormatDef> = serde_json::from_str(json).map_err(ExtractError::Json)?;
    validate_formats(&formats)?;
    Ok(formats)
}

/// Validate that a format registry is well-formed.
pub fn validate_formats(formats: &[FormatDef]) -> Result<(), ExtractError> {
    let defaults = formats.iter().filter(|f| f.detection.default).count();
    if defaults > 1 {
        return Err(ExtractError::FormatsInvalid(
            "more than one format is marked as default".into(),
        ));
    }

    for fmt in formats {
        if fmt.name.is_empty() {
            return Err(ExtractError::FormatsInvalid(
                "format name must not be empty".into(),
            ));
        }

        if fmt.columns.is_empty() {
            return Err(ExtractError::FormatsInvalid(format!(
                "format '{}' has no columns",
                fmt.name
            )));
        }

        let date_columns = fmt
            .columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Date)
            .count();
        if date_columns != 1 {
            return Err(ExtractError::FormatsInvalid(format!(
                "format '{}' must have exactly one date column (found {})",
                fmt.name, date_columns
            )));
        }

        for col in &fmt.columns {
            if col.x_min >= col.x_max {
                return Err(ExtractError::FormatsInvalid(format!(
                    "format '{}' column '{}' has an empty x range ({} >= {})",
                    fmt.name, col.name, col.x_min, col.x_max
                )));
            }
        }
    }

    Ok(())
}
