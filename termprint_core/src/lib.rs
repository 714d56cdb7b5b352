//! Termprint Core - Platform-agnostic transcript engine
//!
//! Splits pasted terminal transcripts into prompt, command and output, and
//! classifies output lines by severity for highlighting. Pure functions only,
//! so the crate builds for WASM as well as native targets.

pub mod classifier;
pub mod errors;
pub mod prompts;
pub mod severity;
pub mod splitter;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use classifier::{render_colored_output, summarize, ClassifiedLine, Classifier, Status, Summary};
pub use errors::{Error, Result};
pub use prompts::{get_all_prompt_patterns, PromptPattern};
pub use severity::{get_all_severity_rules, Severity, SeverityRule, SEVERITY_GROUPS};
pub use splitter::{parse_console_content, ParsedConsole, Splitter};
