mod config;
mod data;
pub mod error;
pub mod input;
pub mod record;
pub mod render;

pub use config::{Config, Settings, DEFAULT_SETTING_FILE_NAME};
pub use data::CmdExit;
pub use record::ConsoleRecord;
pub use render::RenderOptions;

// Re-export core types for public API compatibility
pub use termprint_core::{
    parse_console_content, render_colored_output, summarize, ClassifiedLine, Classifier,
    ParsedConsole, PromptPattern, Severity, SeverityRule, Splitter, Status, Summary,
    SEVERITY_GROUPS,
};
