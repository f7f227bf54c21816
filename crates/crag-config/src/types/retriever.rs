//! Retriever configuration

use crate::error::Result;
use crate::node::{choice, FromRaw, RawNode};
use crate::types::{ChunkingConfig, DbConfig, EvalConfig, LlmConfig, MetadataConfig};
use serde::Serialize;

/// Number of documents returned when neither the file nor the catalog sets `k`
const DEFAULT_K: usize = 10;

choice! {
    /// What the BM25 index is built over
    pub enum Bm25Source {
        Docs => "docs",
        Chunks => "chunks",
    }
}

/// Retrieval pipeline settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrieverConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval: Option<EvalConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataConfig>,

    pub chunking: ChunkingConfig,

    pub db: DbConfig,

    /// Embedding model
    pub llm: LlmConfig,

    /// Hybrid lexical search, disabled when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bm25: Option<Bm25Source>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerank: Option<LlmConfig>,

    /// Documents returned per query
    pub k: usize,
}

impl FromRaw for RetrieverConfig {
    const CATALOG_PREFIX: &'static str = "retriever";

    fn from_raw(node: &RawNode<'_>) -> Result<Self> {
        // Construction order is part of the contract: the first failing child wins
        let eval = node.child("eval")?;
        let metadata = node.child("metadata")?;
        let chunking = node.required_child("chunking")?;
        let db = node.required_child("db")?;
        let llm = node.required_child("llm")?;
        let bm25 = node.choice("bm25")?;
        let rerank = node.child("rerank")?;
        let k = node.unsigned("k")?.unwrap_or(DEFAULT_K);

        Ok(Self {
            eval,
            metadata,
            chunking,
            db,
            llm,
            bm25,
            rerank,
            k,
        })
    }
}
