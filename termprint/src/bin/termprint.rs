mod cmd;

use std::process::exit;

use console::{style, Style};
use termprint::{CmdExit, Config};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let app = cmd::default::command()
        .subcommand(cmd::split_cmd::command())
        .subcommand(cmd::classify_cmd::command())
        .subcommand(cmd::render_cmd::command())
        .subcommand(cmd::config::command())
        .subcommand(cmd::completions_cmd::command());

    let matches = app.clone().get_matches();

    let level = matches
        .get_one::<String>("log")
        .map_or("info", String::as_str);
    let filter = EnvFilter::try_from_env("LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // completions do not need a configuration folder
    if let Some(("completions", subcommand_matches)) = matches.subcommand() {
        let mut app = app;
        exit(report(cmd::completions_cmd::run(subcommand_matches, &mut app)));
    }

    let config_dir = matches.get_one::<String>("config").map(String::as_str);
    let config = match Config::new(config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Loading config error: {err}");
            exit(err.exit_code())
        }
    };

    // `config` must keep working on a broken settings file so it can be reset
    if let Some(("config", subcommand_matches)) = matches.subcommand() {
        let res = cmd::config::run(subcommand_matches, &config);
        exit(finish(res));
    }

    let settings = match config.get_settings_from_file() {
        Ok(s) => s,
        Err(err) => {
            eprintln!(
                "Could not load config from file. Try resolving by running `{}`\nError: {err}",
                style("termprint config reset").bold().italic().underlined(),
            );
            exit(err.exit_code())
        }
    };

    let res = match matches.subcommand() {
        Some(("split", subcommand_matches)) => cmd::split_cmd::run(subcommand_matches, &settings),
        Some(("classify", subcommand_matches)) => {
            cmd::classify_cmd::run(subcommand_matches, &settings)
        }
        Some(("render", subcommand_matches)) => {
            cmd::render_cmd::run(subcommand_matches, &settings)
        }
        _ => Ok(CmdExit {
            code: exitcode::USAGE,
            message: Some("command not found".to_string()),
        }),
    };

    exit(finish(res))
}

fn finish(res: termprint::error::Result<CmdExit>) -> exitcode::ExitCode {
    match res {
        Ok(cmd) => report(cmd),
        Err(err) => {
            debug!(error = ?err, "command failed");
            eprintln!("{}", Style::new().red().apply_to(&err));
            err.exit_code()
        }
    }
}

fn report(cmd: CmdExit) -> exitcode::ExitCode {
    if let Some(message) = cmd.message {
        let style = if exitcode::is_success(cmd.code) {
            Style::new().green()
        } else {
            Style::new().red()
        };
        eprintln!("{}", style.apply_to(message));
    }
    cmd.code
}
