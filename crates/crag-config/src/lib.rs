//! Configuration validation for the crag retrieval pipeline
//!
//! A crag configuration is a tree of nodes (chunking, vector database, LLMs,
//! metadata, evaluation). Several nodes carry a *discriminant* such as
//! `provider` or `type` whose value decides which sibling fields become
//! mandatory. This crate checks those conditional requirements against the
//! raw document, fills the remaining optional fields from a default catalog,
//! and returns an immutable typed [`Config`].
//!
//! A required field that is present but empty (`""`, `0`, `[]`) is rejected
//! just like a missing one.
//!
//! # Example
//!
//! ```no_run
//! use crag_config::{Config, ConfigValidator, Reporting};
//!
//! // Load and validate with the built-in tables
//! let config = Config::from_file("crag.yml")?;
//!
//! // Or report every missing field of a node at once
//! let config = ConfigValidator::new()
//!     .with_reporting(Reporting::AllMissing)
//!     .validate_file("crag.yml")?;
//!
//! let k = config.retriever.k;
//! # Ok::<(), crag_config::ConfigError>(())
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod loader;
pub mod node;
pub mod rules;
pub mod types;
pub mod validator;

// Re-export main types for convenience
pub use catalog::{DefaultCatalog, DEFAULTS};
pub use engine::Reporting;
pub use error::{ConfigError, ErrorFormatter, Result};
pub use rules::{RequirementTable, RequirementTables, REQUIREMENTS};
pub use types::*;
pub use validator::ConfigValidator;
