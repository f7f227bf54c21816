//! Configuration loading from files
//!
//! Loading only turns a file into a raw document; everything that decides
//! whether the document is acceptable lives in the validator.

pub mod file;
pub mod formats;

use crate::{Config, ConfigValidator, Result};
use std::path::Path;

/// Format for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

impl ConfigValidator {
    /// Load `path` and validate it
    pub fn validate_file<P: AsRef<Path>>(&self, path: P) -> Result<Config> {
        let raw = file::load_from_file(path)?;
        self.validate(&raw)
    }
}

impl Config {
    /// Load and validate a configuration file with the built-in tables
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigValidator::new().validate_file(path)
    }
}
