//! Severity taxonomy and the rule table used to classify output lines.
//!
//! Rules are loaded from the YAML files under `rules/severities` (prepared in
//! build.rs). File-name order is evaluation order and every file holds the
//! rules of a single severity, so the embedded table is already sorted by
//! [`Severity`] precedence.

use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// String with all severity rules from the `rules/severities` folder in YAML format.
const ALL_SEVERITY_RULES: &str = include_str!(concat!(env!("OUT_DIR"), "/all-severity-rules.yaml"));

/// Names of the rule files, in evaluation order.
pub const SEVERITY_GROUPS: &[&str] = &include!(concat!(env!("OUT_DIR"), "/all_severity_groups.rs"));

/// Classification assigned to a single output line.
///
/// Variants are declared in precedence order: when a line matches rules of
/// several severities, the one declared first wins.
#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Error,
    Warning,
    Success,
    Info,
    Debug,
    Trace,
    PathReference,
    Version,
    #[default]
    Plain,
}

impl Severity {
    /// Style token used by rendering layers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::PathReference => "path-reference",
            Self::Version => "version",
            Self::Plain => "plain",
        }
    }

    /// Convert a style token to a severity, ignoring case.
    ///
    /// # Errors
    /// when the given name is not one of the nine style tokens
    pub fn from_string(str: &str) -> Result<Self> {
        match str.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "success" => Ok(Self::Success),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            "path-reference" => Ok(Self::PathReference),
            "version" => Ok(Self::Version),
            "plain" => Ok(Self::Plain),
            _ => Err(Error::InvalidSeverity {
                name: str.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Describes a single line classification rule
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SeverityRule {
    /// Unique identifier for this rule
    pub id: String,
    /// Human-readable description of what the rule detects
    #[serde(default)]
    pub description: String,
    /// Severity assigned to a line matching this rule
    pub severity: Severity,
    /// Regular expression tested against the whole line
    #[serde(with = "serde_regex")]
    pub test: Regex,
}

/// Return all built-in severity rules in evaluation order
///
/// # Errors
/// Returns an error when there's a problem parsing the embedded YAML rules
pub fn get_all_severity_rules() -> Result<Vec<SeverityRule>> {
    Ok(serde_yaml::from_str(ALL_SEVERITY_RULES)?)
}
