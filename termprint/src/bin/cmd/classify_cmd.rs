use clap::{Arg, ArgAction, ArgMatches, Command};
use termprint::error::Result;
use termprint::render::{render_lines, render_summary};
use termprint::{input, summarize, CmdExit, Classifier, RenderOptions, Settings};

pub fn command() -> Command {
    Command::new("classify")
        .about("Classify every line of an output text by severity")
        .arg(
            Arg::new("file")
                .help("Output file, reads stdin when omitted or `-`")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the classified lines as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Append per-severity line counts and the overall status")
                .action(ArgAction::SetTrue),
        )
}

pub fn run(matches: &ArgMatches, settings: &Settings) -> Result<CmdExit> {
    let content = input::read_transcript(matches.get_one::<String>("file").map(String::as_str))?;
    let output = run_classify(
        &content,
        &settings.classifier(),
        matches.get_flag("json"),
        matches.get_flag("summary"),
    )?;
    println!("{output}");
    Ok(CmdExit::ok())
}

fn run_classify(content: &str, classifier: &Classifier, json: bool, summary: bool) -> Result<String> {
    let lines = classifier.classify(content);
    tracing::debug!(lines = lines.len(), "output classified");

    if json {
        if !summary {
            return Ok(serde_json::to_string_pretty(&lines)?);
        }
        let summary = summarize(&lines);
        let doc = serde_json::json!({
            "lines": lines,
            "summary": summary,
            "status": summary.status(),
        });
        return Ok(serde_json::to_string_pretty(&doc)?);
    }

    let options = RenderOptions {
        color: false,
        show_tags: true,
    };
    let mut out = render_lines(&lines, options);
    if summary {
        out.push_str("\n\n");
        out.push_str(&render_summary(&summarize(&lines), options));
    }
    Ok(out)
}
