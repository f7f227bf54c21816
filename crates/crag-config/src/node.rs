//! Typed access to one raw configuration node

use crate::catalog::DefaultCatalog;
use crate::engine::{check_conditional, kind_of, Reporting};
use crate::error::{ConfigError, Result};
use crate::rules::{RequirementTable, RequirementTables};
use serde_json::{Map, Value};

/// Read-only inputs shared by every node of one validation call
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub catalog: &'a DefaultCatalog,
    pub tables: &'a RequirementTables,
    pub reporting: Reporting,
}

impl<'a> ValidationContext<'a> {
    pub fn new(
        catalog: &'a DefaultCatalog,
        tables: &'a RequirementTables,
        reporting: Reporting,
    ) -> Self {
        Self {
            catalog,
            tables,
            reporting,
        }
    }
}

/// A closed set of string values
pub trait Choice: Sized + Copy {
    const OPTIONS: &'static [&'static str];

    fn parse(value: &str) -> Option<Self>;

    fn as_str(&self) -> &'static str;
}

/// A configuration node built from its raw mapping
pub trait FromRaw: Sized {
    /// Catalog key prefix shared by every node of this kind
    const CATALOG_PREFIX: &'static str;

    fn from_raw(node: &RawNode<'_>) -> Result<Self>;
}

/// Declares a [`Choice`] enum that serializes as its string form
macro_rules! choice {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::node::Choice for $name {
            const OPTIONS: &'static [&'static str] = &[$( $text ),+];

            fn parse(value: &str) -> Option<Self> {
                match value {
                    $( $text => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::node::Choice::as_str(self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($crate::node::Choice::as_str(self))
            }
        }
    };
}

pub(crate) use choice;

/// One raw mapping plus where it sits in the tree
#[derive(Debug, Clone)]
pub struct RawNode<'a> {
    path: String,
    prefix: &'static str,
    map: &'a Map<String, Value>,
    ctx: ValidationContext<'a>,
}

impl<'a> RawNode<'a> {
    /// Wrap `value`, which must be a mapping
    pub fn new(
        path: impl Into<String>,
        prefix: &'static str,
        value: &'a Value,
        ctx: ValidationContext<'a>,
    ) -> Result<Self> {
        let path = path.into();
        match value.as_object() {
            Some(map) => Ok(Self {
                path,
                prefix,
                map,
                ctx,
            }),
            None => Err(ConfigError::NotAMapping { path }),
        }
    }

    /// Dotted path of this node instance, empty for the root
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn ctx(&self) -> ValidationContext<'a> {
        self.ctx
    }

    pub fn tables(&self) -> &'a RequirementTables {
        self.ctx.tables
    }

    /// Raw value of `field`; explicit `null` reads as absent
    pub fn raw(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field).filter(|v| !v.is_null())
    }

    /// Catalog default for `field` of this node kind
    pub fn default_for(&self, field: &str) -> Option<&'a Value> {
        let key = if self.prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.prefix, field)
        };
        self.ctx.catalog.get(&key)
    }

    fn effective(&self, field: &str) -> Option<&'a Value> {
        self.raw(field).or_else(|| self.default_for(field))
    }

    fn child_path(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.path, field)
        }
    }

    fn mismatch(&self, field: &str, expected: &str, found: &Value) -> ConfigError {
        ConfigError::TypeMismatch {
            path: self.path.clone(),
            field: field.to_string(),
            expected: expected.to_string(),
            found: kind_of(found).to_string(),
        }
    }

    /// Run the conditional-requirement check and coerce the discriminant
    pub fn discriminant<C: Choice>(&self, table: &RequirementTable) -> Result<C> {
        let value = check_conditional(self, table, self.ctx.reporting)?;
        C::parse(&value).ok_or_else(|| {
            ConfigError::invalid_enum(&self.path, &table.discriminant, value.as_str(), C::OPTIONS)
        })
    }

    pub fn string(&self, field: &str) -> Result<Option<String>> {
        match self.effective(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.mismatch(field, "a string", other)),
        }
    }

    pub fn unsigned(&self, field: &str) -> Result<Option<usize>> {
        match self.effective(field) {
            None => Ok(None),
            Some(value @ Value::Number(n)) => n
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| self.mismatch(field, "a non-negative integer", value)),
            Some(other) => Err(self.mismatch(field, "a non-negative integer", other)),
        }
    }

    pub fn string_list(&self, field: &str) -> Result<Vec<String>> {
        match self.effective(field) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(self.mismatch(field, "a list of strings", other)),
                })
                .collect(),
            Some(other) => Err(self.mismatch(field, "a list of strings", other)),
        }
    }

    pub fn choice<C: Choice>(&self, field: &str) -> Result<Option<C>> {
        match self.effective(field) {
            None => Ok(None),
            Some(Value::String(s)) => C::parse(s).map(Some).ok_or_else(|| {
                ConfigError::invalid_enum(&self.path, field, s.as_str(), C::OPTIONS)
            }),
            Some(other) => Err(self.mismatch(field, "a string", other)),
        }
    }

    /// Build an optional nested node.
    ///
    /// Only the raw input is consulted: catalog defaults fill scalar fields
    /// inside a child, never a whole missing child.
    pub fn child<T: FromRaw>(&self, field: &str) -> Result<Option<T>> {
        match self.raw(field) {
            None => Ok(None),
            Some(value @ Value::Object(_)) => {
                let path = self.child_path(field);
                let node = RawNode::new(path, T::CATALOG_PREFIX, value, self.ctx)?;
                T::from_raw(&node).map(Some)
            }
            Some(other) => Err(self.mismatch(field, "a mapping", other)),
        }
    }

    /// Build a nested node that must be present
    pub fn required_child<T: FromRaw>(&self, field: &str) -> Result<T> {
        self.child(field)?.ok_or_else(|| ConfigError::MissingField {
            path: self.path.clone(),
            field: field.to_string(),
        })
    }
}
