//! Vector database configuration

use crate::error::Result;
use crate::node::{choice, FromRaw, RawNode};
use serde::Serialize;

choice! {
    pub enum DbProvider {
        Chromadb => "chromadb",
        Faiss => "faiss",
    }
}

/// Vector store settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DbConfig {
    pub provider: DbProvider,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,

    /// Directory the index is persisted to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persist_dir: Option<String>,
}

impl FromRaw for DbConfig {
    const CATALOG_PREFIX: &'static str = "retriever.db";

    fn from_raw(node: &RawNode<'_>) -> Result<Self> {
        let provider = node.discriminant(&node.tables().db_provider)?;

        Ok(Self {
            provider,
            collection_name: node.string("collection_name")?,
            persist_dir: node.string("persist_dir")?,
        })
    }
}
