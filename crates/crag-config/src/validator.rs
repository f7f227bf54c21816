//! Entry point turning a raw document into a validated [`Config`]

use crate::catalog::{DefaultCatalog, DEFAULTS};
use crate::engine::Reporting;
use crate::error::Result;
use crate::node::{FromRaw, RawNode, ValidationContext};
use crate::rules::{RequirementTables, REQUIREMENTS};
use crate::types::Config;
use serde_json::Value;

/// Validates raw configuration documents
///
/// Holds the default catalog and requirement tables used for every call.
/// Validation is a pure function of its input: the validator can be shared
/// across threads and reused freely.
///
/// # Example
///
/// ```
/// use crag_config::ConfigValidator;
/// use serde_json::json;
///
/// let raw = json!({
///     "mode": "eval",
///     "repo_url": "https://github.com/example/repo",
///     "eval_path": "data/questions.json",
///     "retriever": {
///         "chunking": {
///             "type": "RecursiveCharacterTextSplitter",
///             "chunk_size": 500,
///             "chunk_overlap": 50
///         },
///         "db": {"provider": "faiss", "persist_dir": "/tmp/faiss"},
///         "llm": {"provider": "hf", "device": "cpu"}
///     }
/// });
///
/// let config = ConfigValidator::new().validate(&raw)?;
/// assert_eq!(config.retriever.k, 10);
/// # Ok::<(), crag_config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigValidator {
    catalog: DefaultCatalog,
    tables: RequirementTables,
    reporting: Reporting,
}

impl ConfigValidator {
    /// Validator using the built-in catalog and tables
    pub fn new() -> Self {
        Self {
            catalog: DEFAULTS.clone(),
            tables: REQUIREMENTS.clone(),
            reporting: Reporting::default(),
        }
    }

    pub fn with_catalog(mut self, catalog: DefaultCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_tables(mut self, tables: RequirementTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_reporting(mut self, reporting: Reporting) -> Self {
        self.reporting = reporting;
        self
    }

    /// Validate `raw` and build the typed tree.
    ///
    /// Fails on the first node that rejects its input; no partial tree is
    /// ever returned.
    pub fn validate(&self, raw: &Value) -> Result<Config> {
        let ctx = ValidationContext::new(&self.catalog, &self.tables, self.reporting);
        let root = RawNode::new("", Config::CATALOG_PREFIX, raw, ctx)?;
        Config::from_raw(&root)
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Validate a raw document with the built-in catalog and tables
    pub fn from_value(raw: &Value) -> Result<Self> {
        ConfigValidator::new().validate(raw)
    }
}
