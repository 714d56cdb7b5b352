use clap::{crate_version, Arg, Command};

pub fn command() -> Command {
    Command::new("termprint")
        .version(crate_version!())
        .about("Split pasted terminal transcripts and highlight their output by severity")
        .arg_required_else_help(true)
        .arg(
            Arg::new("log")
                .long("log")
                .help("Set logging level")
                .value_name("LEVEL")
                .value_parser(["off", "trace", "debug", "info", "warn", "error"])
                .default_value("info")
                .ignore_case(true)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration folder (defaults to the user config dir)")
                .value_name("DIR")
                .global(true),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn log_level_defaults_to_info() {
        let matches = command()
            .subcommand(Command::new("split"))
            .try_get_matches_from(["termprint", "split"])
            .expect("valid args");
        assert_eq!(
            matches.get_one::<String>("log").map(String::as_str),
            Some("info")
        );
        assert!(matches.get_one::<String>("config").is_none());
    }
}
