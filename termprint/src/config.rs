//! Manage the app configuration by creating, resetting and loading the
//! settings file

use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use serde_derive::{Deserialize, Serialize};
use termprint_core::{Classifier, PromptPattern, SeverityRule, Splitter};
use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_SETTING_FILE_NAME: &str = "settings.yaml";

/// describe configuration folder
#[derive(Debug)]
pub struct Config {
    /// Configuration folder path.
    pub root_folder: PathBuf,
    /// config file.
    pub setting_file_path: PathBuf,
}

/// Describe the configuration yaml
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Style output with terminal colors.
    #[serde(default = "default_color")]
    pub color: bool,
    /// Prefix every output line with its severity token.
    #[serde(default)]
    pub show_tags: bool,
    /// Extra prompt patterns, tried before the built-in ones.
    #[serde(default)]
    pub custom_prompts: Vec<PromptPattern>,
    /// Extra severity rules, merged with the built-in ones.
    #[serde(default)]
    pub custom_rules: Vec<SeverityRule>,
}

const fn default_color() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: default_color(),
            show_tags: false,
            custom_prompts: vec![],
            custom_rules: vec![],
        }
    }
}

impl Settings {
    /// Splitter with the user prompts ahead of the built-in patterns.
    #[must_use]
    pub fn splitter(&self) -> Splitter {
        Splitter::with_custom(self.custom_prompts.clone())
    }

    /// Classifier with the user rules merged into the built-in table.
    #[must_use]
    pub fn classifier(&self) -> Classifier {
        Classifier::with_custom(self.custom_rules.clone())
    }
}

impl Config {
    /// Get application setting config.
    ///
    /// # Errors
    ///
    /// Will return `Err` error return on load/save config
    pub fn new(path: Option<&str>) -> Result<Self> {
        let package_name = env!("CARGO_PKG_NAME");

        let config_folder = match path {
            Some(p) => PathBuf::from(p),
            None => match dirs::home_dir() {
                Some(p) => {
                    // $HOME/.termprint wins when it already exists, otherwise
                    // the platform config dir is used.
                    let homedir = p.join(format!(".{package_name}"));
                    let conf_dir = dirs::config_dir().unwrap_or_else(|| homedir.clone());
                    if homedir.is_dir() {
                        homedir
                    } else {
                        conf_dir.join(package_name)
                    }
                }
                None => return Err(Error::Config("could not get directory path".to_string())),
            },
        };

        let setting_config = Self {
            setting_file_path: config_folder.join(DEFAULT_SETTING_FILE_NAME),
            root_folder: config_folder,
        };

        setting_config.create_config_folder()?;
        setting_config.manage_setting_file()?;
        debug!(configuration = ?setting_config, "configuration settings loaded");
        Ok(setting_config)
    }

    /// Convert user settings yaml to struct.
    ///
    /// # Errors
    ///
    /// Will return `Err` has an error when loading the config file
    pub fn get_settings_from_file(&self) -> Result<Settings> {
        Ok(serde_yaml::from_str(&self.read_config_file()?)?)
    }

    /// Create the default settings file when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Will return `Err` file could not created or loaded
    pub fn manage_setting_file(&self) -> Result<()> {
        if !self.setting_file_path.is_file() {
            debug!(path = %self.setting_file_path.display(), "setting file not found");
            self.save_settings_file_from_struct(&Settings::default())?;
        }
        Ok(())
    }

    /// Reset user configuration to the defaults.
    ///
    /// When `backup` is set the current file is renamed first and its new
    /// path is returned.
    ///
    /// # Errors
    ///
    /// Will return `Err` when the file could not be renamed or written
    pub fn reset_config(&self, backup: bool) -> Result<Option<PathBuf>> {
        let backup_path = if backup && self.setting_file_path.is_file() {
            Some(self.backup()?)
        } else {
            None
        };
        self.save_settings_file_from_struct(&Settings::default())?;
        Ok(backup_path)
    }

    /// Convert the given settings to YAML format and write the file.
    ///
    /// # Errors
    ///
    /// Will return `Err` when serialization or writing fails
    pub fn save_settings_file_from_struct(&self, settings: &Settings) -> Result<()> {
        let content = serde_yaml::to_string(settings)?;
        fs::write(&self.setting_file_path, content)?;
        debug!(path = %self.setting_file_path.display(), "settings file saved");
        Ok(())
    }

    /// Create config folder if not exists.
    fn create_config_folder(&self) -> Result<()> {
        if self.root_folder.is_dir() {
            debug!(path = %self.root_folder.display(), "configuration folder found");
            return Ok(());
        }
        fs::create_dir_all(&self.root_folder).map_err(|err| {
            Error::Config(format!(
                "could not create folder {}: {err}",
                self.root_folder.display()
            ))
        })?;
        debug!(path = %self.root_folder.display(), "configuration folder created");
        Ok(())
    }

    /// Return config content.
    fn read_config_file(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.setting_file_path)?)
    }

    fn backup(&self) -> Result<PathBuf> {
        let backup_to = backup_file_path(
            &self.setting_file_path,
            SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
        );
        fs::rename(&self.setting_file_path, &backup_to)?;
        debug!(path = %backup_to.display(), "settings file backed up");
        Ok(backup_to)
    }
}

fn backup_file_path(setting_file_path: &Path, secs: u64) -> PathBuf {
    let mut name = setting_file_path.as_os_str().to_os_string();
    name.push(format!(".{secs}.bak"));
    PathBuf::from(name)
}

#[cfg(test)]
mod test_config {
    use std::fs::read_dir;

    use termprint_core::Severity;

    use super::*;

    fn initialize_config_folder(temp_dir: &Path) -> Config {
        let temp_dir = temp_dir.join("app");
        Config::new(Some(&temp_dir.display().to_string())).expect("Failed to create new config")
    }

    #[test]
    fn can_create_new_config() {
        let temp_dir = tree_fs::TreeBuilder::default()
            .create()
            .expect("create tree");
        let config = initialize_config_folder(&temp_dir.root);
        assert!(config.root_folder.is_dir());
        assert!(config.setting_file_path.is_file());
    }

    #[test]
    fn can_get_default_settings_from_file() {
        let temp_dir = tree_fs::TreeBuilder::default()
            .create()
            .expect("create tree");
        let config = initialize_config_folder(&temp_dir.root);
        let settings = config
            .get_settings_from_file()
            .expect("Failed to get settings from file");
        assert!(settings.color);
        assert!(!settings.show_tags);
        assert!(settings.custom_prompts.is_empty());
        assert!(settings.custom_rules.is_empty());
    }

    #[test]
    fn can_load_custom_rules() {
        let temp_dir = tree_fs::TreeBuilder::default()
            .create()
            .expect("create tree");
        let config = initialize_config_folder(&temp_dir.root);
        fs::write(
            &config.setting_file_path,
            r#"
color: false
custom_prompts:
  - id: custom:fish
    test: '^(alice@laptop ~/code>)\s*'
custom_rules:
  - id: custom:oom
    severity: error
    test: 'OOMKilled'
"#,
        )
        .expect("write settings");

        let settings = config
            .get_settings_from_file()
            .expect("Failed to get settings from file");
        assert!(!settings.color);
        assert!(!settings.show_tags);

        let parsed = settings.splitter().parse("alice@laptop ~/code> ls\nsrc");
        assert_eq!(parsed.prompt, "alice@laptop ~/code>");
        assert_eq!(
            settings.classifier().classify_line("pod OOMKilled"),
            Severity::Error
        );
    }

    #[test]
    fn invalid_regex_in_settings_is_a_yaml_error() {
        let temp_dir = tree_fs::TreeBuilder::default()
            .create()
            .expect("create tree");
        let config = initialize_config_folder(&temp_dir.root);
        fs::write(
            &config.setting_file_path,
            "custom_rules:\n  - id: broken\n    severity: error\n    test: '('\n",
        )
        .expect("write settings");

        assert!(matches!(config.get_settings_from_file(), Err(Error::Yaml(_))));
    }

    #[test]
    fn can_manage_missing_setting_file() {
        let temp_dir = tree_fs::TreeBuilder::default()
            .create()
            .expect("create tree");
        let mut config = initialize_config_folder(&temp_dir.root);

        config.setting_file_path = temp_dir.root.join("new-file.yaml");
        assert!(!config.setting_file_path.is_file());
        config
            .manage_setting_file()
            .expect("Failed to manage setting file");
        assert!(config.setting_file_path.is_file());
    }

    #[test]
    fn can_reset_config_with_override() {
        let temp_dir = tree_fs::TreeBuilder::default()
            .create()
            .expect("create tree");
        let config = initialize_config_folder(&temp_dir.root);
        let settings = Settings {
            show_tags: true,
            ..Settings::default()
        };
        config
            .save_settings_file_from_struct(&settings)
            .expect("Failed to save settings");

        let backup = config.reset_config(false).expect("Failed to reset config");
        assert_eq!(backup, None);
        assert!(!config.get_settings_from_file().expect("settings").show_tags);
        assert_eq!(read_dir(&config.root_folder).expect("read dir").count(), 1);
    }

    #[test]
    fn can_reset_config_with_backup() {
        let temp_dir = tree_fs::TreeBuilder::default()
            .create()
            .expect("create tree");
        let config = initialize_config_folder(&temp_dir.root);
        let settings = Settings {
            show_tags: true,
            ..Settings::default()
        };
        config
            .save_settings_file_from_struct(&settings)
            .expect("Failed to save settings");

        let backup = config
            .reset_config(true)
            .expect("Failed to reset config")
            .expect("backup path");
        assert!(backup.is_file());
        assert!(backup.display().to_string().ends_with(".bak"));
        assert!(!config.get_settings_from_file().expect("settings").show_tags);
        assert_eq!(read_dir(&config.root_folder).expect("read dir").count(), 2);
    }

    #[test]
    fn backup_file_path_appends_timestamp() {
        assert_eq!(
            backup_file_path(Path::new("/tmp/app/settings.yaml"), 42),
            PathBuf::from("/tmp/app/settings.yaml.42.bak")
        );
    }
}
