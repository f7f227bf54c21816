//! Configuration type definitions
//!
//! One module per node of the configuration tree. Every node is immutable
//! once built and can only be obtained through validation.

pub mod chunking;
pub mod db;
pub mod eval;
pub mod llm;
pub mod metadata;
pub mod retriever;

// Re-export all types for convenience
pub use chunking::{ChunkingConfig, ChunkingType};
pub use db::{DbConfig, DbProvider};
pub use eval::EvalConfig;
pub use llm::{LlmConfig, LlmProvider, UseCase};
pub use metadata::MetadataConfig;
pub use retriever::{Bm25Source, RetrieverConfig};

use crate::error::Result;
use crate::node::{choice, FromRaw, RawNode};
use serde::Serialize;

choice! {
    /// Top-level run mode
    pub enum Mode {
        /// Batch evaluation against a question set (`eval_path`)
        Eval => "eval",
        /// Interactive question answering
        Ui => "ui",
    }
}

/// Main configuration struct aggregating all settings
///
/// This is the top-level configuration that users interact with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Name used to tag logs and results of this run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_path: Option<String>,

    pub mode: Mode,

    /// Repository to index, cloned if `repo_dir` does not exist yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_dir: Option<String>,

    /// Evaluation question set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_path: Option<String>,

    pub retriever: RetrieverConfig,

    /// Answer generation model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<LlmConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions_path: Option<String>,
}

impl FromRaw for Config {
    const CATALOG_PREFIX: &'static str = "";

    fn from_raw(node: &RawNode<'_>) -> Result<Self> {
        // Mode is checked before any nested node is touched
        let mode = node.discriminant(&node.tables().mode)?;
        let retriever = node.required_child("retriever")?;

        Ok(Self {
            exp_name: node.string("exp_name")?,
            log_path: node.string("log_path")?,
            mode,
            repo_url: node.string("repo_url")?,
            repo_dir: node.string("repo_dir")?,
            eval_path: node.string("eval_path")?,
            retriever,
            generator: node.child("generator")?,
            languages_path: node.string("languages_path")?,
            extensions_path: node.string("extensions_path")?,
        })
    }
}

impl Config {
    /// Render the validated configuration as YAML
    pub fn to_yaml(&self) -> std::result::Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
