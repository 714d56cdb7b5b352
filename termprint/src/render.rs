//! Terminal rendering of split and classified transcripts.

use std::fmt::Write;

use console::{style, Style};
use termprint_core::{ClassifiedLine, ParsedConsole, Severity, Summary};

/// Marker printed in front of a record note
const NOTE_MARKER: &str = "»";

/// How transcripts are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub color: bool,
    pub show_tags: bool,
}

/// Terminal style of a severity.
#[must_use]
pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Error => Style::new().red(),
        Severity::Warning => Style::new().yellow(),
        Severity::Success => Style::new().green(),
        Severity::Info => Style::new().blue(),
        Severity::Debug | Severity::Trace => Style::new().dim(),
        Severity::PathReference => Style::new().cyan(),
        Severity::Version => Style::new().magenta(),
        Severity::Plain => Style::new(),
    }
}

fn paint(text: &str, style: &Style, options: RenderOptions) -> String {
    if options.color {
        style.apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

fn render_line(line: &ClassifiedLine, options: RenderOptions) -> String {
    let text = paint(&line.text, &severity_style(line.severity), options);
    if options.show_tags {
        format!("{}\t{text}", line.severity)
    } else {
        text
    }
}

/// Classified lines, one per output line.
#[must_use]
pub fn render_lines(lines: &[ClassifiedLine], options: RenderOptions) -> String {
    lines
        .iter()
        .map(|line| render_line(line, options))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A full transcript block: prompt and command, classified output, note.
#[must_use]
pub fn render_block(
    parsed: &ParsedConsole,
    lines: &[ClassifiedLine],
    note: Option<&str>,
    options: RenderOptions,
) -> String {
    let mut out: Vec<String> = Vec::new();

    if parsed.has_prompt() || !parsed.command.is_empty() {
        let prompt = paint(&parsed.prompt, &Style::new().green().bold(), options);
        if parsed.command.is_empty() {
            out.push(prompt);
        } else {
            let command = paint(&parsed.command, &Style::new().bold(), options);
            out.push(format!("{prompt} {command}"));
        }
    }

    if !parsed.output.is_empty() {
        out.push(render_lines(lines, options));
    }

    if let Some(note) = note.filter(|n| !n.trim().is_empty()) {
        let note = format!("{NOTE_MARKER} {note}");
        out.push(paint(&note, &Style::new().dim().italic(), options));
    }

    out.join("\n")
}

/// Per-severity counts followed by the overall status.
#[must_use]
pub fn render_summary(summary: &Summary, options: RenderOptions) -> String {
    let mut output = format!("{} line(s)", summary.total);
    for (severity, count) in &summary.counts {
        let _ = write!(output, ", {severity}: {count}");
    }
    let status = summary.status().to_string();
    let status = if options.color {
        style(status).bold().to_string()
    } else {
        status
    };
    let _ = write!(output, "\nstatus: {status}");
    output
}
