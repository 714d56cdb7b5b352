use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, Command};
use termprint::error::Result;
use termprint::{CmdExit, Config, Settings, SEVERITY_GROUPS};

pub fn command() -> Command {
    Command::new("config")
        .about("Manage termprint configuration")
        .arg_required_else_help(true)
        .subcommand(Command::new("show").about("Show current configuration"))
        .subcommand(
            Command::new("reset")
                .about("Reset configuration to defaults")
                .arg(
                    Arg::new("backup")
                        .long("backup")
                        .help("Keep the current settings file as a timestamped backup")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("path").about("Print the settings file path"))
}

pub fn run(matches: &ArgMatches, config: &Config) -> Result<CmdExit> {
    match matches.subcommand() {
        Some(("show", _)) => run_show(config),
        Some(("reset", sub)) => Ok(run_reset(config, sub.get_flag("backup"))),
        Some(("path", _)) => {
            println!("{}", config.setting_file_path.display());
            Ok(CmdExit::ok())
        }
        _ => Ok(CmdExit {
            code: exitcode::USAGE,
            message: Some("Unknown config subcommand.".to_string()),
        }),
    }
}

// ---------------------------------------------------------------------------
// reset
// ---------------------------------------------------------------------------

pub fn run_reset(config: &Config, backup: bool) -> CmdExit {
    match config.reset_config(backup) {
        Ok(Some(path)) => CmdExit {
            code: exitcode::OK,
            message: Some(format!(
                "termprint configuration reset successfully, backup saved to {}",
                path.display()
            )),
        },
        Ok(None) => CmdExit {
            code: exitcode::OK,
            message: Some("termprint configuration reset successfully".to_string()),
        },
        Err(e) => CmdExit {
            code: exitcode::CONFIG,
            message: Some(format!("reset settings error: {e}")),
        },
    }
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

pub fn run_show(config: &Config) -> Result<CmdExit> {
    let settings = config.get_settings_from_file()?;
    println!(
        "{}",
        format_settings_display(&settings, &config.setting_file_path)
    );
    Ok(CmdExit::ok())
}

fn format_settings_display(settings: &Settings, config_path: &Path) -> String {
    let mut lines = Vec::new();

    lines.push(format!("config:         {}", config_path.display()));
    lines.push(String::new());
    lines.push(format!(
        "color:          {}",
        if settings.color { "enabled" } else { "disabled" }
    ));
    lines.push(format!(
        "show_tags:      {}",
        if settings.show_tags {
            "enabled"
        } else {
            "disabled"
        }
    ));

    lines.push(String::new());
    lines.push(format!(
        "built-in rule groups: {}",
        SEVERITY_GROUPS.join(", ")
    ));

    lines.push(String::new());
    lines.push(format!("custom prompts ({}):", settings.custom_prompts.len()));
    for pattern in &settings.custom_prompts {
        lines.push(format!("  {}  {}", pattern.id, pattern.test.as_str()));
    }

    lines.push(String::new());
    lines.push(format!("custom rules ({}):", settings.custom_rules.len()));
    for rule in &settings.custom_rules {
        lines.push(format!(
            "  {}  [{}]  {}",
            rule.id,
            rule.severity,
            rule.test.as_str()
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod test_config_cli_command {
    use std::fs;

    use tree_fs::Tree;

    use super::*;

    fn initialize_config_folder(temp_dir: &Tree) -> Config {
        let temp_dir = temp_dir.root.join("app");
        Config::new(Some(&temp_dir.display().to_string())).expect("Failed to create new config")
    }

    #[test]
    fn can_run_reset() {
        let temp_dir = tree_fs::TreeBuilder::default()
            .create()
            .expect("create tree");
        let config = initialize_config_folder(&temp_dir);
        fs::write(&config.setting_file_path, "color: false\n").expect("write settings");

        let exit = run_reset(&config, false);
        assert_eq!(exit.code, exitcode::OK);
        assert_eq!(
            exit.message.as_deref(),
            Some("termprint configuration reset successfully")
        );
        assert!(config.get_settings_from_file().expect("settings").color);
    }

    #[test]
    fn can_run_reset_with_backup() {
        let temp_dir = tree_fs::TreeBuilder::default()
            .create()
            .expect("create tree");
        let config = initialize_config_folder(&temp_dir);

        let exit = run_reset(&config, true);
        assert_eq!(exit.code, exitcode::OK);
        assert!(exit
            .message
            .as_deref()
            .is_some_and(|m| m.contains("backup saved to")));
    }

    #[test]
    fn can_format_default_settings() {
        let out = format_settings_display(&Settings::default(), Path::new("/tmp/settings.yaml"));
        assert_eq!(
            out,
            "config:         /tmp/settings.yaml\n\ncolor:          enabled\nshow_tags:      disabled\n\nbuilt-in rule groups: 01-error, 02-warning, 03-success, 04-info, 05-debug, 06-trace, 07-path-reference, 08-version\n\ncustom prompts (0):\n\ncustom rules (0):"
        );
    }

    #[test]
    fn can_format_custom_rules() {
        let settings: Settings = serde_yaml::from_str(
            r"
custom_prompts:
  - id: custom:lambda
    test: '^(λ)\s*'
custom_rules:
  - id: custom:oom
    severity: error
    test: 'OOMKilled'
",
        )
        .expect("settings yaml");
        let out = format_settings_display(&settings, Path::new("settings.yaml"));
        assert!(out.contains("custom prompts (1):\n  custom:lambda  ^(λ)\\s*"));
        assert!(out.contains("custom rules (1):\n  custom:oom  [error]  OOMKilled"));
    }

    #[test]
    fn unknown_subcommand_is_usage() {
        let temp_dir = tree_fs::TreeBuilder::default()
            .create()
            .expect("create tree");
        let config = initialize_config_folder(&temp_dir);
        let matches = clap::ArgMatches::default();
        let exit = run(&matches, &config).expect("run");
        assert_eq!(exit.code, exitcode::USAGE);
    }
}
