use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::models::{FifaStage, GroupStageExport};

/// Errors raised while parsing an export document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The knockout export root must be a JSON array of stage objects
    #[error("knockout export root is not an array")]
    KnockoutRootNotArray,
}

/// Parse a group-stage export file
pub fn parse_group_export_file(path: &Path) -> Result<GroupStageExport> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_group_export_json(&content).context("Failed to parse group-stage export")
}

/// Parse a group-stage export from a JSON string
pub fn parse_group_export_json(json: &str) -> Result<GroupStageExport, ParseError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a knockout-stage export file
pub fn parse_knockout_file(path: &Path) -> Result<Vec<FifaStage>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_knockout_json(&content).context("Failed to parse knockout export")
}

/// Parse a knockout-stage export from a JSON string.
///
/// The root is checked before deserializing into stages, so valid JSON with
/// the wrong root surfaces as [`ParseError::KnockoutRootNotArray`] rather
/// than a generic deserialization failure. This condition halts the run
/// before any output file is written.
pub fn parse_knockout_json(json: &str) -> Result<Vec<FifaStage>, ParseError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(ParseError::KnockoutRootNotArray);
    }
    Ok(serde_json::from_value(value)?)
}
