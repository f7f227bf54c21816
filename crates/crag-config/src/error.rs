//! Error types for configuration loading and validation

pub mod format;

use std::path::PathBuf;
use thiserror::Error;

pub use format::ErrorFormatter;

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur during configuration loading and validation
///
/// `path` is always the dotted path of the node that rejected the input
/// (empty for the top-level node); `field` is the key inside that node.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Unknown configuration format
    #[error("Unknown configuration format for file: {path}\nSupported formats: .yml, .yaml, .toml, .json")]
    UnknownFormat { path: PathBuf },

    /// YAML parsing error with context
    #[error("Failed to parse YAML configuration{location}:\n{message}\n{context}")]
    YamlError {
        location: String,
        message: String,
        context: String,
    },

    /// TOML parsing error with context
    #[error("Failed to parse TOML configuration{location}:\n{message}\n{context}")]
    TomlError {
        location: String,
        message: String,
        context: String,
    },

    /// JSON parsing error with context
    #[error("Failed to parse JSON configuration{location}:\n{message}\n{context}")]
    JsonError {
        location: String,
        message: String,
        context: String,
    },

    /// IO error
    #[error("Failed to read configuration file: {path}\n{message}")]
    IoError { path: PathBuf, message: String },

    /// Document (or a nested node) is not a key/value mapping
    #[error("{} must be a mapping of keys to values", display_node(.path))]
    NotAMapping { path: String },

    /// A mandatory nested node is absent
    #[error("`{}` is required", display_field(.path, .field))]
    MissingField { path: String, field: String },

    /// A required discriminant with no default is absent
    #[error("`{field}` is required in {}", display_node(.path))]
    MissingDiscriminant { path: String, field: String },

    /// Discriminant value has no entry in the requirement table
    #[error("Unrecognized value '{value}' for {}\n  Valid options: {options}\n  Hint: {hint}", display_field(.path, .field))]
    UnrecognizedEnumValue {
        path: String,
        field: String,
        value: String,
        options: String,
        hint: String,
    },

    /// A field required by the discriminant (or a metadata piece) is absent or empty
    #[error("`{}` is required when {trigger}", display_field(.path, .field))]
    MissingConditionalField {
        path: String,
        field: String,
        trigger: String,
    },

    /// Invalid enum value for a non-discriminant field
    #[error("Invalid value '{value}' for {}\n  Valid options: {options}\n  Hint: {hint}", display_field(.path, .field))]
    InvalidEnumValue {
        path: String,
        field: String,
        value: String,
        options: String,
        hint: String,
    },

    /// Wrong primitive type
    #[error("{} must be {expected}, got {found}", display_field(.path, .field))]
    TypeMismatch {
        path: String,
        field: String,
        expected: String,
        found: String,
    },

    /// Multiple validation errors
    #[error("Configuration has {count} validation error(s):\n{errors}")]
    MultipleErrors { count: usize, errors: String },
}

fn display_node(path: &str) -> String {
    if path.is_empty() {
        "the configuration root".to_string()
    } else {
        format!("`{}`", path)
    }
}

pub(crate) fn display_field(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", path, field)
    }
}

impl ConfigError {
    /// Create an unrecognized discriminant error with a suggestion
    pub fn unrecognized(
        path: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
        options: &[&str],
    ) -> Self {
        let value = value.into();
        let hint = Self::suggest_option(&value, options);
        Self::UnrecognizedEnumValue {
            path: path.into(),
            field: field.into(),
            value,
            options: options.join(", "),
            hint,
        }
    }

    /// Create an invalid enum error with a suggestion
    pub fn invalid_enum(
        path: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
        options: &[&str],
    ) -> Self {
        let value = value.into();
        let hint = Self::suggest_option(&value, options);
        Self::InvalidEnumValue {
            path: path.into(),
            field: field.into(),
            value,
            options: options.join(", "),
            hint,
        }
    }

    /// Name of the offending field, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field, .. }
            | Self::MissingDiscriminant { field, .. }
            | Self::UnrecognizedEnumValue { field, .. }
            | Self::MissingConditionalField { field, .. }
            | Self::InvalidEnumValue { field, .. }
            | Self::TypeMismatch { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Dotted path of the node that rejected the input
    pub fn node_path(&self) -> Option<&str> {
        match self {
            Self::NotAMapping { path }
            | Self::MissingField { path, .. }
            | Self::MissingDiscriminant { path, .. }
            | Self::UnrecognizedEnumValue { path, .. }
            | Self::MissingConditionalField { path, .. }
            | Self::InvalidEnumValue { path, .. }
            | Self::TypeMismatch { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Create a YAML error from serde_yaml::Error
    pub fn from_yaml_error(err: serde_yaml::Error, content: &str, path: Option<&str>) -> Self {
        let context = extract_yaml_context(&err, content);
        Self::YamlError {
            location: path.map(|p| format!(" in {}", p)).unwrap_or_default(),
            message: err.to_string(),
            context,
        }
    }

    /// Create a TOML error from toml::de::Error
    pub fn from_toml_error(err: toml::de::Error, content: &str, path: Option<&str>) -> Self {
        let context = extract_toml_context(&err, content);
        Self::TomlError {
            location: path.map(|p| format!(" in {}", p)).unwrap_or_default(),
            message: err.message().to_string(),
            context,
        }
    }

    /// Create a JSON error from serde_json::Error
    pub fn from_json_error(err: serde_json::Error, content: &str, path: Option<&str>) -> Self {
        let context = excerpt(content, err.line(), err.column());
        Self::JsonError {
            location: path.map(|p| format!(" in {}", p)).unwrap_or_default(),
            message: err.to_string(),
            context,
        }
    }

    fn suggest_option(input: &str, options: &[&str]) -> String {
        let input_lower = input.to_lowercase();
        let closest = options
            .iter()
            .map(|opt| (opt, Self::distance(&input_lower, &opt.to_lowercase())))
            .min_by_key(|(_, d)| *d);

        match closest {
            Some((opt, d)) if d <= 3 => format!("Did you mean '{}'?", opt),
            _ => "Check your configuration file".to_string(),
        }
    }

    /// Levenshtein distance over chars
    fn distance(a: &str, b: &str) -> usize {
        let b_chars: Vec<char> = b.chars().collect();
        let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();

        for (i, a_char) in a.chars().enumerate() {
            let mut curr_row = vec![i + 1];
            for (j, b_char) in b_chars.iter().enumerate() {
                let cost = usize::from(a_char != *b_char);
                let best = (curr_row[j] + 1)
                    .min(prev_row[j + 1] + 1)
                    .min(prev_row[j] + cost);
                curr_row.push(best);
            }
            prev_row = curr_row;
        }

        prev_row.last().copied().unwrap_or(0)
    }
}

fn extract_yaml_context(err: &serde_yaml::Error, content: &str) -> String {
    match err.location() {
        Some(loc) => excerpt(content, loc.line(), loc.column()),
        None => String::new(),
    }
}

fn extract_toml_context(err: &toml::de::Error, content: &str) -> String {
    match err.span() {
        Some(span) => {
            let line_num = content[..span.start].matches('\n').count() + 1;
            excerpt(content, line_num, 0)
        }
        None => String::new(),
    }
}

/// Render the lines around `line_num` (1-based), marking the offending one
fn excerpt(content: &str, line_num: usize, col_num: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    if line_num == 0 || line_num > lines.len() {
        return String::new();
    }

    let start = line_num.saturating_sub(2);
    let end = (line_num + 1).min(lines.len());

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            if num == line_num {
                let mut result = format!("→ {:3} | {}", num, line);
                if col_num > 0 {
                    result.push_str(&format!("\n      {}^", " ".repeat(col_num - 1)));
                }
                result
            } else {
                format!("  {:3} | {}", num, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
