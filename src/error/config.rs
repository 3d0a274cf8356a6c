use std::fmt;

use thiserror::Error;

/// A single failed configuration field: which variable and why it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvViolation {
    pub field: String,
    pub reason: String,
}

impl EnvViolation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for EnvViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment validation failed; every failing field is listed so startup
    /// logs report them all at once rather than one per restart.
    #[error("Environment validation failed:\n{}", format_violations(.0))]
    Validation(Vec<EnvViolation>),
}

fn format_violations(violations: &[EnvViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("- {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}
