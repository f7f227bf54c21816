//! TOML format parser

use crate::{error::ConfigError, Result};
use serde_json::Value;

/// Parse a raw document from TOML string
pub fn parse(content: &str) -> Result<Value> {
    parse_with_path(content, None)
}

/// Parse a raw document from TOML string with file path for better errors
pub fn parse_with_path(content: &str, path: Option<&str>) -> Result<Value> {
    ::toml::from_str(content).map_err(|e| ConfigError::from_toml_error(e, content, path))
}
