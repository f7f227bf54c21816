//! Document chunking configuration

use crate::error::Result;
use crate::node::{choice, FromRaw, RawNode};
use crate::types::LlmConfig;
use serde::Serialize;

choice! {
    /// Chunking strategy
    pub enum ChunkingType {
        /// Fixed-size character windows with overlap
        RecursiveCharacterTextSplitter => "RecursiveCharacterTextSplitter",
        /// Let a model pick chunk boundaries (requires `llm_setup`)
        LlmChunking => "LLMChunking",
    }
}

/// Configuration for chunking documents before embedding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChunkingConfig {
    #[serde(rename = "type")]
    pub kind: ChunkingType,

    /// Characters per chunk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<usize>,

    /// Characters shared between neighbouring chunks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_overlap: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_setup: Option<LlmConfig>,
}

impl FromRaw for ChunkingConfig {
    const CATALOG_PREFIX: &'static str = "retriever.chunking";

    fn from_raw(node: &RawNode<'_>) -> Result<Self> {
        let kind = node.discriminant(&node.tables().chunking_type)?;

        Ok(Self {
            kind,
            chunk_size: node.unsigned("chunk_size")?,
            chunk_overlap: node.unsigned("chunk_overlap")?,
            llm_setup: node.child("llm_setup")?,
        })
    }
}
