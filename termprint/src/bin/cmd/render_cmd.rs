use clap::{Arg, ArgAction, ArgMatches, Command};
use termprint::error::Result;
use termprint::render::render_block;
use termprint::{input, CmdExit, ConsoleRecord, RenderOptions, Settings};

pub fn command() -> Command {
    Command::new("render")
        .about("Split a transcript and print it with highlighted output")
        .arg(
            Arg::new("file")
                .help("Transcript file, reads stdin when omitted or `-`")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("note")
                .short('n')
                .long("note")
                .help("Note printed under the transcript")
                .value_name("TEXT"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable terminal colors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("record")
                .long("record")
                .help("Print a record JSON document instead of the styled block")
                .action(ArgAction::SetTrue),
        )
}

pub fn run(matches: &ArgMatches, settings: &Settings) -> Result<CmdExit> {
    let content = input::read_transcript(matches.get_one::<String>("file").map(String::as_str))?;
    let note = matches.get_one::<String>("note").cloned();

    let output = if matches.get_flag("record") {
        run_record(&content, settings, note)?
    } else {
        let options = RenderOptions {
            color: settings.color && !matches.get_flag("no-color"),
            show_tags: settings.show_tags,
        };
        run_render(&content, settings, note.as_deref(), options)
    };
    println!("{output}");
    Ok(CmdExit::ok())
}

fn run_render(content: &str, settings: &Settings, note: Option<&str>, options: RenderOptions) -> String {
    let parsed = settings.splitter().parse(content);
    let lines = settings.classifier().classify(&parsed.output);
    tracing::debug!(
        prompt_id = ?parsed.prompt_id,
        lines = lines.len(),
        "transcript rendered"
    );
    render_block(&parsed, &lines, note, options)
}

fn run_record(content: &str, settings: &Settings, note: Option<String>) -> Result<String> {
    let record = ConsoleRecord::new(settings.splitter().parse(content), note)?;
    tracing::debug!(id = %record.id, "record created");
    Ok(serde_json::to_string_pretty(&record)?)
}
