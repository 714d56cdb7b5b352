pub mod classify_cmd;
pub mod completions_cmd;
pub mod config;
pub mod default;
pub mod render_cmd;
pub mod split_cmd;
