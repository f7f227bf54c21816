//! Evaluation preprocessing configuration

use crate::error::Result;
use crate::node::{FromRaw, RawNode};
use crate::types::LlmConfig;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalConfig {
    /// Model that rewrites evaluation queries before retrieval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub augment_query: Option<LlmConfig>,
}

impl FromRaw for EvalConfig {
    const CATALOG_PREFIX: &'static str = "retriever.eval";

    fn from_raw(node: &RawNode<'_>) -> Result<Self> {
        Ok(Self {
            augment_query: node.child("augment_query")?,
        })
    }
}
