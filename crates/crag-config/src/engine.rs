//! Discriminated conditional-requirement checks
//!
//! A node is well-formed when every field its discriminant makes mandatory is
//! present *and truthy* in the raw input. Defaults are never consulted for
//! required fields, so leaving one out cannot be rescued by the catalog.

use crate::error::{ConfigError, Result};
use crate::node::RawNode;
use crate::rules::RequirementTable;
use serde_json::Value;

/// How many missing fields a single node reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reporting {
    /// Stop at the first missing field, in declared order
    #[default]
    FirstOffender,
    /// Collect every missing field of the node, in declared order
    AllMissing,
}

/// Truthiness of a raw value.
///
/// `null`, `false`, zero, the empty string, the empty list and the empty
/// mapping all count as absent. This means `chunk_overlap: 0` does not satisfy
/// a requirement on `chunk_overlap`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Human-readable kind of a raw value, for type mismatch messages
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

/// Check the conditional requirements of `node` against `table`.
///
/// Returns the effective discriminant value: the raw one, or the catalog
/// default when the raw input omits it.
pub fn check_conditional(
    node: &RawNode<'_>,
    table: &RequirementTable,
    reporting: Reporting,
) -> Result<String> {
    let field = table.discriminant.as_str();

    let value = match node.raw(field).or_else(|| node.default_for(field)) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(ConfigError::TypeMismatch {
                path: node.path().to_string(),
                field: field.to_string(),
                expected: "a string".to_string(),
                found: kind_of(other).to_string(),
            })
        }
        None => {
            return Err(ConfigError::MissingDiscriminant {
                path: node.path().to_string(),
                field: field.to_string(),
            })
        }
    };

    let required = table.required_for(&value).ok_or_else(|| {
        ConfigError::unrecognized(node.path(), field, value.as_str(), &table.options())
    })?;

    let trigger = format!("`{}` is `{}`", field, value);
    let missing = required
        .iter()
        .map(String::as_str)
        .filter(|name| !node.raw(name).is_some_and(is_truthy));

    report_missing(node.path(), missing, &trigger, reporting)?;
    Ok(value)
}

/// Set-membership variant used by metadata: if any entry of `list` belongs to
/// `members`, `field` must be present in the raw node.
pub fn check_membership(
    node: &RawNode<'_>,
    list: &[String],
    members: &[String],
    field: &str,
) -> Result<()> {
    if node.raw(field).is_some() {
        return Ok(());
    }

    match list.iter().find(|entry| members.contains(entry)) {
        Some(entry) => Err(ConfigError::MissingConditionalField {
            path: node.path().to_string(),
            field: field.to_string(),
            trigger: format!("metadata piece `{}` is requested", entry),
        }),
        None => Ok(()),
    }
}

fn report_missing<'a>(
    path: &str,
    missing: impl Iterator<Item = &'a str>,
    trigger: &str,
    reporting: Reporting,
) -> Result<()> {
    let to_error = |field: &str| ConfigError::MissingConditionalField {
        path: path.to_string(),
        field: field.to_string(),
        trigger: trigger.to_string(),
    };

    let mut errors: Vec<ConfigError> = match reporting {
        Reporting::FirstOffender => missing.take(1).map(to_error).collect(),
        Reporting::AllMissing => missing.map(to_error).collect(),
    };

    if errors.len() > 1 {
        return Err(ConfigError::MultipleErrors {
            count: errors.len(),
            errors: errors
                .iter()
                .map(|e| format!("  - {}", e))
                .collect::<Vec<_>>()
                .join("\n"),
        });
    }

    match errors.pop() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
