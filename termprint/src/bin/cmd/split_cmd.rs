use clap::{Arg, ArgAction, ArgMatches, Command};
use termprint::error::Result;
use termprint::{input, CmdExit, ParsedConsole, Settings, Splitter};

pub fn command() -> Command {
    Command::new("split")
        .about("Split a transcript into prompt, command and output")
        .arg(
            Arg::new("file")
                .help("Transcript file, reads stdin when omitted or `-`")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the result as JSON")
                .action(ArgAction::SetTrue),
        )
}

pub fn run(matches: &ArgMatches, settings: &Settings) -> Result<CmdExit> {
    let content = input::read_transcript(matches.get_one::<String>("file").map(String::as_str))?;
    let output = run_split(&content, &settings.splitter(), matches.get_flag("json"))?;
    println!("{output}");
    Ok(CmdExit::ok())
}

fn run_split(content: &str, splitter: &Splitter, json: bool) -> Result<String> {
    let parsed = splitter.parse(content);
    tracing::debug!(prompt_id = ?parsed.prompt_id, "transcript split");
    if json {
        return Ok(serde_json::to_string_pretty(&parsed)?);
    }
    Ok(format_parsed(&parsed))
}

fn format_parsed(parsed: &ParsedConsole) -> String {
    let mut out = format!("prompt:  {}\ncommand: {}\noutput:", parsed.prompt, parsed.command);
    if !parsed.output.is_empty() {
        out.push('\n');
        out.push_str(&parsed.output);
    }
    out
}
