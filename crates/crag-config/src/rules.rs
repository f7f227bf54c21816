//! Required-field tables
//!
//! Each discriminated node kind has one table mapping a discriminant value to
//! the fields that value makes mandatory. The tables are plain data; the
//! logic that applies them lives in [`crate::engine`].

use once_cell::sync::Lazy;

/// Process-wide read-only requirement tables
pub static REQUIREMENTS: Lazy<RequirementTables> = Lazy::new(RequirementTables::builtin);

/// Discriminant value → ordered list of required field names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementTable {
    /// Name of the discriminant field, e.g. `provider`
    pub discriminant: String,
    /// Recognized values in declaration order, each with its required fields
    pub by_value: Vec<(String, Vec<String>)>,
}

impl RequirementTable {
    pub fn new(discriminant: &str, entries: Vec<(&str, Vec<&str>)>) -> Self {
        Self {
            discriminant: discriminant.to_string(),
            by_value: entries
                .into_iter()
                .map(|(value, fields)| {
                    (
                        value.to_string(),
                        fields.iter().map(|f| f.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Fields required for `value`, or `None` if the value is not recognized
    pub fn required_for(&self, value: &str) -> Option<&[String]> {
        self.by_value
            .iter()
            .find(|(key, _)| key == value)
            .map(|(_, fields)| fields.as_slice())
    }

    /// Recognized discriminant values
    pub fn options(&self) -> Vec<&str> {
        self.by_value.iter().map(|(key, _)| key.as_str()).collect()
    }
}

/// All tables consulted while validating one configuration tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementTables {
    /// Top-level run mode
    pub mode: RequirementTable,
    /// LLM backend, shared by every LLM role
    pub llm_provider: RequirementTable,
    pub chunking_type: RequirementTable,
    pub db_provider: RequirementTable,
    /// Metadata pieces that can only be produced with an `llm_summary` model
    pub llm_summary_required: Vec<String>,
}

impl RequirementTables {
    pub fn builtin() -> Self {
        Self {
            mode: RequirementTable::new(
                "mode",
                vec![
                    ("eval", vec!["repo_url", "eval_path"]),
                    ("ui", vec!["repo_url", "generator"]),
                ],
            ),
            llm_provider: RequirementTable::new(
                "provider",
                vec![("hf", vec!["device"]), ("openai", vec!["api_key", "model_name"])],
            ),
            chunking_type: RequirementTable::new(
                "type",
                vec![
                    ("RecursiveCharacterTextSplitter", vec!["chunk_size", "chunk_overlap"]),
                    ("LLMChunking", vec!["llm_setup"]),
                ],
            ),
            db_provider: RequirementTable::new(
                "provider",
                vec![
                    ("chromadb", vec!["collection_name", "persist_dir"]),
                    ("faiss", vec!["persist_dir"]),
                ],
            ),
            llm_summary_required: vec!["summary".to_string(), "keywords".to_string()],
        }
    }
}

impl Default for RequirementTables {
    fn default() -> Self {
        Self::builtin()
    }
}
