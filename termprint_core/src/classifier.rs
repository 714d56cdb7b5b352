//! Line severity classification
//!
//! Every line of an output text is tested against an ordered rule table and
//! gets the severity of the first matching rule, or [`Severity::Plain`].

use crate::severity::{get_all_severity_rules, Severity, SeverityRule};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::OnceLock};

/// One output line and its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub text: String,
    #[serde(rename = "className")]
    pub severity: Severity,
    /// Id of the rule that matched, `None` for plain lines
    #[serde(default, rename = "ruleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}

/// Overall status of an output, the way record badges show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Error,
    Warning,
    Info,
    Resolved,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Resolved => "resolved",
        };
        write!(f, "{s}")
    }
}

/// Per-severity line counts of a classified output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub counts: BTreeMap<Severity, usize>,
}

impl Summary {
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.counts.get(&severity).copied().unwrap_or(0)
    }

    /// Error wins over warning, warning over success. Anything else is info.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.count(Severity::Error) > 0 {
            Status::Error
        } else if self.count(Severity::Warning) > 0 {
            Status::Warning
        } else if self.count(Severity::Success) > 0 {
            Status::Resolved
        } else {
            Status::Info
        }
    }
}

/// Count classified lines per severity.
#[must_use]
pub fn summarize(lines: &[ClassifiedLine]) -> Summary {
    let mut summary = Summary {
        total: lines.len(),
        ..Summary::default()
    };
    for line in lines {
        *summary.counts.entry(line.severity).or_insert(0) += 1;
    }
    summary
}

/// Line classifier over an ordered list of severity rules.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<SeverityRule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(default_rules().to_vec())
    }
}

impl Classifier {
    /// Build a classifier. Rules are kept in the given order, `plain` rules are dropped.
    #[must_use]
    pub fn new(rules: Vec<SeverityRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .filter(|r| r.severity != Severity::Plain)
                .collect(),
        }
    }

    /// Built-in rules merged with `custom`.
    ///
    /// The merged table is ordered by severity precedence; within a severity
    /// custom rules come first.
    #[must_use]
    pub fn with_custom(custom: Vec<SeverityRule>) -> Self {
        let mut rules = custom;
        rules.extend_from_slice(default_rules());
        rules.sort_by_key(|r| r.severity);
        Self::new(rules)
    }

    #[must_use]
    pub fn rules(&self) -> &[SeverityRule] {
        &self.rules
    }

    fn matching_rule(&self, line: &str) -> Option<&SeverityRule> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        self.rules.iter().find(|r| r.test.is_match(line))
    }

    /// Severity of a single line.
    #[must_use]
    pub fn classify_line(&self, line: &str) -> Severity {
        self.matching_rule(line)
            .map_or(Severity::Plain, |r| r.severity)
    }

    /// Classify every `\n`-separated line of `output`, in order.
    ///
    /// `N` newlines always give `N + 1` lines, empty ones included.
    #[must_use]
    pub fn classify(&self, output: &str) -> Vec<ClassifiedLine> {
        output
            .split('\n')
            .map(|line| {
                let rule = self.matching_rule(line);
                ClassifiedLine {
                    text: line.to_string(),
                    severity: rule.map_or(Severity::Plain, |r| r.severity),
                    rule_id: rule.map(|r| r.id.clone()),
                }
            })
            .collect()
    }
}

fn default_rules() -> &'static [SeverityRule] {
    static RULES: OnceLock<Vec<SeverityRule>> = OnceLock::new();
    RULES.get_or_init(|| get_all_severity_rules().unwrap_or_default())
}

fn default_classifier() -> &'static Classifier {
    static CLASSIFIER: OnceLock<Classifier> = OnceLock::new();
    CLASSIFIER.get_or_init(Classifier::default)
}

/// Classify `output` with the built-in rules.
#[must_use]
pub fn render_colored_output(output: &str) -> Vec<ClassifiedLine> {
    default_classifier().classify(output)
}
