//! JSON format parser

use crate::{error::ConfigError, Result};
use serde_json::Value;

/// Parse a raw document from JSON string
pub fn parse(content: &str) -> Result<Value> {
    parse_with_path(content, None)
}

/// Parse a raw document from JSON string with file path for better errors
pub fn parse_with_path(content: &str, path: Option<&str>) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| ConfigError::from_json_error(e, content, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_json() {
        let raw = parse(r#"{"mode": "ui", "retriever": {"k": 5}}"#).unwrap();
        assert_eq!(raw["retriever"]["k"], 5);
    }

    #[test]
    fn test_parse_error_has_context() {
        let json = "{\n  \"mode\": \"ui\",\n  \"retriever\": {\n}";
        match parse(json).unwrap_err() {
            ConfigError::JsonError { context, .. } => assert!(context.contains('→')),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
