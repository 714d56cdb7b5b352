use clap::{Arg, ArgMatches, Command};
use clap_complete::{generate, Generator, Shell};
use termprint::CmdExit;

const SHELLS: [&str; 6] = ["bash", "zsh", "fish", "elvish", "powershell", "nushell"];

pub fn command() -> Command {
    Command::new("completions")
        .about("Generate shell completion scripts")
        .arg(
            Arg::new("shell")
                .help("Shell to generate completions for: bash, zsh, fish, elvish, powershell, nushell")
                .required(true)
                .value_parser(SHELLS),
        )
}

pub fn run(matches: &ArgMatches, app: &mut Command) -> CmdExit {
    let Some(shell_name) = matches.get_one::<String>("shell") else {
        return CmdExit {
            code: exitcode::USAGE,
            message: Some("shell argument is required".to_string()),
        };
    };

    let mut out = std::io::stdout();
    match shell_name.as_str() {
        "bash" => generate_completions(Shell::Bash, app, &mut out),
        "zsh" => generate_completions(Shell::Zsh, app, &mut out),
        "fish" => generate_completions(Shell::Fish, app, &mut out),
        "elvish" => generate_completions(Shell::Elvish, app, &mut out),
        "powershell" => generate_completions(Shell::PowerShell, app, &mut out),
        "nushell" => generate_completions(clap_complete_nushell::Nushell, app, &mut out),
        _ => {
            return CmdExit {
                code: exitcode::USAGE,
                message: Some(format!(
                    "Unsupported shell: {shell_name}. Supported: {}",
                    SHELLS.join(", ")
                )),
            };
        }
    }

    CmdExit::ok()
}

fn generate_completions(gen: impl Generator, app: &mut Command, out: &mut dyn std::io::Write) {
    generate(gen, app, "termprint", out);
}
