//! Default catalog for optional configuration fields
//!
//! Every optional field has one fallback value, keyed by its dotted path in
//! the configuration tree. Nodes of the same kind share one set of keys: all
//! LLM roles (main, rerank, summary, query augmentation, chunking) read
//! `retriever.llm.*`.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// Process-wide read-only catalog of shipped defaults
pub static DEFAULTS: Lazy<DefaultCatalog> = Lazy::new(DefaultCatalog::builtin);

/// Fallback values for optional fields, looked up by dotted path
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultCatalog {
    root: Value,
}

impl DefaultCatalog {
    /// Wrap a nested mapping as a catalog
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// A catalog with no defaults at all
    pub fn empty() -> Self {
        Self { root: json!({}) }
    }

    /// The defaults shipped with crag
    pub fn builtin() -> Self {
        Self::from_value(json!({
            "exp_name": "crag",
            "log_path": "logs",
            "languages_path": "config/languages.yaml",
            "extensions_path": "config/extensions.yaml",
            "retriever": {
                "k": 10,
                "llm": {
                    "provider": "hf",
                    "device": "cpu",
                    "api_key": null,
                    "model_name": "sentence-transformers/all-MiniLM-L6-v2",
                    "batch_size": 32,
                    "num_threads": 4,
                    "use_case": "embedding",
                    "split_text_system_msg": "You split source files into self-contained, semantically coherent chunks.",
                    "split_text_human_msg": "Split the following code into chunks:\n\n{text}",
                    "summarize_msg": "Summarize what the following code does in a few sentences:\n\n{text}",
                    "augment_msg": "Rewrite the following question so it retrieves more relevant code:\n\n{query}",
                    "rerank_msg": "Rate how relevant this snippet is to the question on a scale from 0 to 10.\n\nQuestion: {query}\n\nSnippet:\n{text}",
                    "generate_msg": "Answer the question using only the context below.\n\nContext:\n{context}\n\nQuestion: {query}"
                },
                "chunking": {
                    "type": "RecursiveCharacterTextSplitter",
                    "chunk_size": 1000,
                    "chunk_overlap": 100,
                    "llm_setup": null
                },
                "db": {
                    "provider": "chromadb",
                    "collection_name": "crag",
                    "persist_dir": "db"
                },
                "metadata": {
                    "list": [],
                    "llm_summary": null
                },
                "eval": {
                    "augment_query": null
                }
            }
        }))
    }

    /// Look up a default by dotted path; `null` entries count as no default
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(&self.root, |node, key| node.get(key))
            .filter(|value| !value.is_null())
    }

    /// The underlying tree
    pub fn as_value(&self) -> &Value {
        &self.root
    }
}

impl Default for DefaultCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
