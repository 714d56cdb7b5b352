//! Split a pasted transcript into prompt, command and output.

use crate::prompts::{find_prompt, get_all_prompt_patterns, PromptPattern};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A transcript split into its three parts.
///
/// `prompt` is empty iff no pattern recognized the first line; `command` is
/// then empty too and `output` holds the whole trimmed input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedConsole {
    pub prompt: String,
    pub command: String,
    pub output: String,
    /// Id of the prompt pattern that matched the first line
    #[serde(default, rename = "promptId", skip_serializing_if = "Option::is_none")]
    pub prompt_id: Option<String>,
}

impl ParsedConsole {
    /// All fields empty, returned for blank input
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            prompt: String::new(),
            command: String::new(),
            output: String::new(),
            prompt_id: None,
        }
    }

    /// The whole trimmed input kept as output
    #[must_use]
    pub const fn output_only(output: String) -> Self {
        Self {
            prompt: String::new(),
            command: String::new(),
            output,
            prompt_id: None,
        }
    }

    #[must_use]
    pub fn has_prompt(&self) -> bool {
        !self.prompt.is_empty()
    }
}

/// Prompt/command splitter over an ordered list of prompt patterns.
#[derive(Debug, Clone)]
pub struct Splitter {
    patterns: Vec<PromptPattern>,
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new(default_patterns().to_vec())
    }
}

impl Splitter {
    #[must_use]
    pub const fn new(patterns: Vec<PromptPattern>) -> Self {
        Self { patterns }
    }

    /// Built-in patterns preceded by `custom`, so user prompts are tried first.
    #[must_use]
    pub fn with_custom(custom: Vec<PromptPattern>) -> Self {
        let mut patterns = custom;
        patterns.extend_from_slice(default_patterns());
        Self::new(patterns)
    }

    #[must_use]
    pub fn patterns(&self) -> &[PromptPattern] {
        &self.patterns
    }

    /// Split `content` into prompt, command and output. Never fails.
    #[must_use]
    pub fn parse(&self, content: &str) -> ParsedConsole {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return ParsedConsole::empty();
        }

        let lines: Vec<&str> = trimmed.split('\n').collect();
        let first_line = strip_cr(lines[0]);

        let Some(found) = find_prompt(&self.patterns, first_line) else {
            return ParsedConsole::output_only(trimmed.to_string());
        };

        let mut command_lines: Vec<&str> = vec![found.rest];
        let mut output_start = 1;
        for line in &lines[1..] {
            let line = strip_cr(line);
            let previous = command_lines.last().copied().unwrap_or_default();
            if is_continuation_line(line) || previous.ends_with('\\') {
                command_lines.push(line);
                output_start += 1;
            } else {
                break;
            }
        }

        ParsedConsole {
            prompt: found.prompt.to_string(),
            command: command_lines.join("\n"),
            output: lines[output_start..].join("\n"),
            prompt_id: Some(found.pattern_id.to_string()),
        }
    }
}

/// Whether `line` continues the command typed on the previous line:
/// a `> ` continuation marker or leading indentation.
#[must_use]
pub fn is_continuation_line(line: &str) -> bool {
    let mut chars = line.chars();
    match chars.next() {
        Some('>') => chars.next().is_some_and(char::is_whitespace),
        Some(c) => c.is_whitespace(),
        None => false,
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn default_patterns() -> &'static [PromptPattern] {
    static PATTERNS: OnceLock<Vec<PromptPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| get_all_prompt_patterns().unwrap_or_default())
}

fn default_splitter() -> &'static Splitter {
    static SPLITTER: OnceLock<Splitter> = OnceLock::new();
    SPLITTER.get_or_init(Splitter::default)
}

/// Split `content` with the built-in prompt patterns.
#[must_use]
pub fn parse_console_content(content: &str) -> ParsedConsole {
    default_splitter().parse(content)
}
