//! LLM configuration
//!
//! The same node type backs every model-driven step of the pipeline:
//! embedding, generation, reranking, metadata summaries, query augmentation
//! and LLM chunking. Each role gets its own independently validated instance.

use crate::error::Result;
use crate::node::{choice, FromRaw, RawNode};
use serde::Serialize;

choice! {
    /// Backend serving the model
    pub enum LlmProvider {
        /// Local Hugging Face model
        Hf => "hf",
        /// OpenAI API (requires `api_key`)
        OpenAi => "openai",
    }
}

choice! {
    /// What the model is used for
    pub enum UseCase {
        Embedding => "embedding",
        Generation => "generation",
        Reranking => "reranking",
    }
}

/// LLM (Large Language Model) configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LlmConfig {
    pub provider: LlmProvider,

    /// Torch device for Hugging Face models, e.g. "cpu" or "cuda"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Examples: "gpt-4o-mini", "sentence-transformers/all-MiniLM-L6-v2"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_threads: Option<usize>,

    pub use_case: UseCase,

    // Prompt templates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_text_system_msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_text_human_msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summarize_msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub augment_msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerank_msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_msg: Option<String>,
}

impl FromRaw for LlmConfig {
    const CATALOG_PREFIX: &'static str = "retriever.llm";

    fn from_raw(node: &RawNode<'_>) -> Result<Self> {
        let provider = node.discriminant(&node.tables().llm_provider)?;

        Ok(Self {
            provider,
            device: node.string("device")?,
            api_key: node.string("api_key")?,
            model_name: node.string("model_name")?,
            batch_size: node.unsigned("batch_size")?,
            num_threads: node.unsigned("num_threads")?,
            use_case: node.choice("use_case")?.unwrap_or(UseCase::Embedding),
            split_text_system_msg: node.string("split_text_system_msg")?,
            split_text_human_msg: node.string("split_text_human_msg")?,
            summarize_msg: node.string("summarize_msg")?,
            augment_msg: node.string("augment_msg")?,
            rerank_msg: node.string("rerank_msg")?,
            generate_msg: node.string("generate_msg")?,
        })
    }
}
