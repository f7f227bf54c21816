//! Terminal rendering for configuration errors

use crate::error::{display_field, ConfigError};
use std::fmt;
use yansi::Paint;

/// Format error with colors and context
pub struct ErrorFormatter {
    error: ConfigError,
    use_colors: bool,
}

impl ErrorFormatter {
    /// Create a new error formatter, detecting color support on stderr
    pub fn new(error: ConfigError) -> Self {
        Self {
            error,
            use_colors: supports_color(),
        }
    }

    /// Create a formatter that never emits ANSI escapes
    pub fn plain(error: ConfigError) -> Self {
        Self {
            error,
            use_colors: false,
        }
    }

    /// Format the error with colors and context
    pub fn format(&self) -> String {
        if self.use_colors {
            self.format_colored()
        } else {
            self.format_plain()
        }
    }

    fn format_colored(&self) -> String {
        match &self.error {
            ConfigError::UnrecognizedEnumValue {
                path,
                field,
                value,
                options,
                hint,
            }
            | ConfigError::InvalidEnumValue {
                path,
                field,
                value,
                options,
                hint,
            } => {
                let value_str = format!("'{}'", value);
                let field_str = display_field(path, field);
                format!(
                    "{} Invalid value {} for {}\n  {}: {}\n  {}: {}",
                    Paint::red("✗").bold(),
                    Paint::yellow(&value_str),
                    Paint::cyan(&field_str),
                    Paint::new("Valid options").bold(),
                    options,
                    Paint::new("Hint").bold(),
                    Paint::green(hint)
                )
            }
            ConfigError::MissingConditionalField {
                path,
                field,
                trigger,
            } => {
                let field_str = display_field(path, field);
                format!(
                    "{} {} is required when {}",
                    Paint::red("✗").bold(),
                    Paint::cyan(&field_str),
                    trigger
                )
            }
            ConfigError::MissingDiscriminant { path, field } => {
                let field_str = display_field(path, field);
                format!(
                    "{} {} is required",
                    Paint::red("✗").bold(),
                    Paint::cyan(&field_str)
                )
            }
            ConfigError::TypeMismatch {
                path,
                field,
                expected,
                found,
            } => {
                let field_str = display_field(path, field);
                format!(
                    "{} {} must be {}, got {}",
                    Paint::red("✗").bold(),
                    Paint::cyan(&field_str),
                    Paint::green(expected),
                    Paint::yellow(found)
                )
            }
            ConfigError::FileNotFound { path } => {
                let path_str = path.display().to_string();
                format!(
                    "{} Configuration file not found: {}",
                    Paint::red("✗").bold(),
                    Paint::yellow(&path_str)
                )
            }
            _ => format!("{} {}", Paint::red("✗").bold(), self.format_plain()),
        }
    }

    fn format_plain(&self) -> String {
        self.error.to_string()
    }
}

/// Check if terminal supports colors
fn supports_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stderr)
}

impl fmt::Display for ErrorFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
