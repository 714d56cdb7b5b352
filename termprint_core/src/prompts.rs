//! Shell prompt recognition patterns
//!
//! Patterns are ordered from the most distinctive to the most generic; the
//! first one matching the first line of a transcript wins.

use crate::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// String with all prompt patterns from the `rules/prompts` folder (prepared in build.rs) in YAML format.
const ALL_PROMPTS: &str = include_str!(concat!(env!("OUT_DIR"), "/all-prompts.yaml"));

/// Describes a single prompt pattern
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PromptPattern {
    /// Unique identifier for this pattern
    pub id: String,
    /// Human-readable description of the prompt shape
    #[serde(default)]
    pub description: String,
    /// Anchored regular expression. Capture group 1 is the prompt text, the
    /// whole match (prompt and trailing whitespace) is stripped from the line.
    #[serde(with = "serde_regex")]
    pub test: Regex,
}

/// A prompt found at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMatch<'a> {
    pub prompt: &'a str,
    pub rest: &'a str,
    pub pattern_id: &'a str,
}

impl PromptPattern {
    /// Try this pattern against `line`.
    #[must_use]
    pub fn match_line<'a>(&'a self, line: &'a str) -> Option<PromptMatch<'a>> {
        let caps = self.test.captures(line)?;
        let whole = caps.get(0)?;
        // A match not anchored at the line start is not a prompt.
        if whole.start() != 0 {
            return None;
        }
        let prompt = caps.get(1).map_or(whole.as_str(), |m| m.as_str());
        // An empty prompt would leave a command without a prompt.
        if prompt.is_empty() {
            return None;
        }
        Some(PromptMatch {
            prompt,
            rest: &line[whole.end()..],
            pattern_id: &self.id,
        })
    }
}

/// Return all built-in prompt patterns in evaluation order
///
/// # Errors
/// Returns an error when there's a problem parsing the embedded YAML patterns
pub fn get_all_prompt_patterns() -> Result<Vec<PromptPattern>> {
    Ok(serde_yaml::from_str(ALL_PROMPTS)?)
}

/// Find the first pattern in `patterns` that recognizes a prompt on `line`.
#[must_use]
pub fn find_prompt<'a>(patterns: &'a [PromptPattern], line: &'a str) -> Option<PromptMatch<'a>> {
    patterns.iter().find_map(|p| p.match_line(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn patterns() -> Vec<PromptPattern> {
        get_all_prompt_patterns().expect("Failed to load prompt patterns")
    }

    #[test]
    fn can_get_all_prompt_patterns() {
        let patterns = patterns();
        assert_eq!(patterns.len(), 10);
        assert_eq!(patterns[0].id, "unix:user_host_path");
        assert_eq!(patterns[9].id, "generic:tool");
    }

    #[rstest]
    #[case("alice@server:~/app$ ls -la", "alice@server:~/app$", "ls -la", "unix:user_host_path")]
    #[case("alice@server# reboot", "alice@server#", "reboot", "unix:user_host")]
    #[case("[root@db ~]# systemctl status", "[root@db ~]#", "systemctl status", "unix:bracketed")]
    #[case("[root@db /var/log]tail", "[root@db /var/log]", "tail", "unix:bracketed")]
    #[case("buildbox:/srv/app% make", "buildbox:/srv/app%", "make", "unix:host_path")]
    #[case("PS C:\\Users\\alice> Get-Process", "PS C:\\Users\\alice>", "Get-Process", "windows:powershell")]
    #[case("ps c:\\> dir", "ps c:\\>", "dir", "windows:powershell")]
    #[case("C:\\Windows\\System32> ipconfig", "C:\\Windows\\System32>", "ipconfig", "windows:cmd")]
    #[case("$ echo hi", "$", "echo hi", "generic:terminator")]
    #[case("#", "#", "", "generic:terminator")]
    #[case(">>> print(1)", ">>>", "print(1)", "generic:python_repl")]
    #[case("MySQL> SELECT 1;", "MySQL>", "SELECT 1;", "generic:mysql")]
    #[case("redis> GET key", "redis>", "GET key", "generic:tool")]
    fn can_find_prompt(
        #[case] line: &str,
        #[case] prompt: &str,
        #[case] rest: &str,
        #[case] pattern_id: &str,
    ) {
        let patterns = patterns();
        let found = find_prompt(&patterns, line).expect("prompt expected");
        assert_eq!(
            found,
            PromptMatch {
                prompt,
                rest,
                pattern_id
            }
        );
    }

    #[rstest]
    #[case("just some text")]
    #[case("total 48")]
    #[case("-rw-r--r-- 1 alice staff 120 README.md")]
    #[case("$HOME is not set")]
    fn no_prompt_on_plain_text(#[case] line: &str) {
        assert_eq!(find_prompt(&patterns(), line), None);
    }

    #[rstest]
    #[case(r"^(\s*)")]
    #[case(r"^")]
    fn empty_match_is_not_a_prompt(#[case] test: &str) {
        let pattern = PromptPattern {
            id: "custom:empty".to_string(),
            description: String::new(),
            test: Regex::new(test).expect("valid regex"),
        };
        assert_eq!(pattern.match_line("hello world"), None);
    }

    #[test]
    fn windows_path_is_not_read_as_unix_host_path() {
        let patterns = patterns();
        let found = find_prompt(&patterns, "D:\\work\\repo> git status").expect("prompt expected");
        assert_eq!(found.pattern_id, "windows:cmd");
        assert_eq!(found.prompt, "D:\\work\\repo>");
    }
}
