//! WASM bindings for `termprint_core`
//!
//! This module provides JavaScript bindings for the splitter and classifier,
//! so the rendering layer in the browser calls the same engine as the CLI.

use serde_json;
use wasm_bindgen::prelude::*;

use crate::{
    get_all_prompt_patterns, get_all_severity_rules, parse_console_content,
    render_colored_output, ClassifiedLine, Classifier, ParsedConsole, PromptPattern, Severity,
    SeverityRule, Splitter,
};

// Global allocator for WASM (must be at module level)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM-compatible split result.
#[wasm_bindgen]
pub struct WasmParsedConsole {
    prompt: String,
    command: String,
    output: String,
}

#[wasm_bindgen]
impl WasmParsedConsole {
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn prompt(&self) -> String {
        self.prompt.clone()
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn command(&self) -> String {
        self.command.clone()
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn output(&self) -> String {
        self.output.clone()
    }
}

impl From<ParsedConsole> for WasmParsedConsole {
    fn from(parsed: ParsedConsole) -> Self {
        Self {
            prompt: parsed.prompt,
            command: parsed.command,
            output: parsed.output,
        }
    }
}

fn lines_to_json(lines: &[ClassifiedLine]) -> String {
    serde_json::to_string(lines).unwrap_or_else(|_| "[]".to_string())
}

/// Splits a pasted transcript into prompt, command and output.
#[wasm_bindgen(js_name = parseConsoleContent)]
#[must_use]
pub fn parse_console_content_wasm(content: &str) -> WasmParsedConsole {
    WasmParsedConsole::from(parse_console_content(content))
}

/// Classifies every line of `output`.
///
/// Returns a JSON array of `{ text, className }` objects, one per line.
#[wasm_bindgen(js_name = renderColoredOutput)]
#[must_use]
pub fn render_colored_output_wasm(output: &str) -> String {
    lines_to_json(&render_colored_output(output))
}

/// Returns the style token of a single line.
#[wasm_bindgen(js_name = getLineClassName)]
#[must_use]
pub fn get_line_class_name_wasm(line: &str) -> String {
    render_colored_output(line)
        .first()
        .map_or(Severity::Plain, |l| l.severity)
        .to_string()
}

/// Splits a transcript using extra prompt patterns tried before the built-ins.
///
/// `patterns_json` is a JSON array of `{ id, test }` objects.
///
/// # Errors
///
/// Returns an error if the patterns are not valid JSON or contain an invalid regex.
#[wasm_bindgen(js_name = parseConsoleContentWith)]
pub fn parse_console_content_with_wasm(
    content: &str,
    patterns_json: &str,
) -> Result<WasmParsedConsole, JsValue> {
    let custom: Vec<PromptPattern> = serde_json::from_str(patterns_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid prompt patterns: {e}")))?;
    Ok(WasmParsedConsole::from(
        Splitter::with_custom(custom).parse(content),
    ))
}

/// Classifies output using extra severity rules merged with the built-ins.
///
/// `rules_json` is a JSON array of `{ id, severity, test }` objects.
///
/// # Errors
///
/// Returns an error if the rules are not valid JSON or contain an invalid regex.
#[wasm_bindgen(js_name = renderColoredOutputWith)]
pub fn render_colored_output_with_wasm(output: &str, rules_json: &str) -> Result<String, JsValue> {
    let custom: Vec<SeverityRule> = serde_json::from_str(rules_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid severity rules: {e}")))?;
    Ok(lines_to_json(&Classifier::with_custom(custom).classify(output)))
}

/// Returns all built-in prompt patterns as a JSON string.
///
/// # Errors
///
/// Returns an error if pattern loading fails or if serialization to JSON fails.
#[wasm_bindgen(js_name = getPromptPatterns)]
pub fn get_prompt_patterns_wasm() -> Result<String, JsValue> {
    let patterns = get_all_prompt_patterns()
        .map_err(|e| JsValue::from_str(&format!("Failed to load prompt patterns: {e}")))?;

    serde_json::to_string(&patterns)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize prompt patterns: {e}")))
}

/// Returns all built-in severity rules as a JSON string.
///
/// # Errors
///
/// Returns an error if rule loading fails or if serialization to JSON fails.
#[wasm_bindgen(js_name = getSeverityRules)]
pub fn get_severity_rules_wasm() -> Result<String, JsValue> {
    let rules = get_all_severity_rules()
        .map_err(|e| JsValue::from_str(&format!("Failed to load severity rules: {e}")))?;

    serde_json::to_string(&rules)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize severity rules: {e}")))
}

/// Initializes the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_console_content_wasm() {
        let parsed = parse_console_content_wasm(">>> print(1)\n1");
        assert_eq!(parsed.prompt(), ">>>");
        assert_eq!(parsed.command(), "print(1)");
        assert_eq!(parsed.output(), "1");
    }

    #[test]
    fn test_render_colored_output_wasm() {
        let json = render_colored_output_wasm("[WARN] careful\n");
        assert_eq!(
            json,
            r#"[{"text":"[WARN] careful","className":"warning","ruleId":"warning:keyword"},{"text":"","className":"plain"}]"#
        );
    }

    #[test]
    fn test_get_line_class_name_wasm() {
        assert_eq!(get_line_class_name_wasm("src/lib.rs:10"), "path-reference");
        assert_eq!(get_line_class_name_wasm("hello"), "plain");
    }

    #[test]
    fn test_parse_console_content_with_wasm() {
        let parsed = parse_console_content_with_wasm(
            "λ git status\nclean",
            r#"[{"id":"custom:lambda","test":"^(λ)\\s*"}]"#,
        )
        .expect("valid patterns");
        assert_eq!(parsed.prompt(), "λ");
        assert_eq!(parsed.command(), "git status");
        assert_eq!(parsed.output(), "clean");
    }

    #[test]
    fn test_render_colored_output_with_wasm() {
        let json = render_colored_output_with_wasm(
            "pod OOMKilled",
            r#"[{"id":"custom:oom","severity":"error","test":"OOMKilled"}]"#,
        )
        .expect("valid rules");
        assert!(json.contains(r#""className":"error""#));
        assert!(json.contains("custom:oom"));
    }

    #[test]
    fn test_get_prompt_patterns_wasm() {
        let patterns = get_prompt_patterns_wasm().expect("Failed to get prompt patterns");
        assert!(patterns.contains("unix:user_host_path"));
        assert!(patterns.contains("generic:tool"));
    }

    #[test]
    fn test_get_severity_rules_wasm() {
        let rules = get_severity_rules_wasm().expect("Failed to get severity rules");
        assert!(rules.contains("error:keyword"));
        assert!(rules.contains("path-reference"));
    }
}
