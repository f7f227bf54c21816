//! Metadata attached to documents before chunking

use crate::engine::check_membership;
use crate::error::Result;
use crate::node::{FromRaw, RawNode};
use crate::types::LlmConfig;
use serde::Serialize;

/// Metadata pieces to compute for each document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataConfig {
    /// Piece names, e.g. "file_name", "language", "summary"
    pub list: Vec<String>,

    /// Model used by pieces that need one (see `llm_summary_required`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_summary: Option<LlmConfig>,
}

impl FromRaw for MetadataConfig {
    const CATALOG_PREFIX: &'static str = "retriever.metadata";

    fn from_raw(node: &RawNode<'_>) -> Result<Self> {
        let list = node.string_list("list")?;
        check_membership(
            node,
            &list,
            &node.tables().llm_summary_required,
            "llm_summary",
        )?;

        Ok(Self {
            llm_summary: node.child("llm_summary")?,
            list,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULTS;
    use crate::engine::Reporting;
    use crate::error::ConfigError;
    use crate::node::ValidationContext;
    use crate::rules::REQUIREMENTS;
    use serde_json::{json, Value};

    fn build(raw: Value) -> Result<MetadataConfig> {
        let ctx = ValidationContext::new(&DEFAULTS, &REQUIREMENTS, Reporting::FirstOffender);
        let node = RawNode::new("retriever.metadata", MetadataConfig::CATALOG_PREFIX, &raw, ctx)?;
        MetadataConfig::from_raw(&node)
    }

    #[test]
    fn test_plain_pieces_need_no_llm() {
        let config = build(json!({"list": ["file_name", "language"]})).unwrap();
        assert_eq!(config.list, vec!["file_name", "language"]);
        assert_eq!(config.llm_summary, None);
    }

    #[test]
    fn test_summary_needs_llm() {
        let err = build(json!({"list": ["summary"]})).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingConditionalField { ref field, ref trigger, .. }
                if field == "llm_summary" && trigger.contains("`summary`")
        ));
    }

    #[test]
    fn test_null_llm_summary_is_absent() {
        let err = build(json!({"list": ["keywords"], "llm_summary": null})).unwrap_err();
        assert_eq!(err.field(), Some("llm_summary"));
    }

    #[test]
    fn test_llm_summary_is_validated() {
        let err = build(json!({
            "list": ["summary"],
            "llm_summary": {"provider": "openai", "api_key": "sk"}
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingConditionalField { ref path, ref field, .. }
                if path == "retriever.metadata.llm_summary" && field == "model_name"
        ));
    }

    #[test]
    fn test_missing_list_uses_default() {
        let config = build(json!({})).unwrap();
        assert!(config.list.is_empty());
    }
}
