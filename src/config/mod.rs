//! Configuration management module.
//!
//! This module handles loading and saving the YAML configuration file that
//! holds the API base URL and the theme name.

mod error;

pub use error::ConfigError;

use crate::api::DEFAULT_API_URL;
use crate::error::AppError;
use crate::ui::Theme;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/movies-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default values.
    ///
    pub fn new() -> Config {
        Config {
            api_url: default_api_url(),
            theme_name: default_theme_name(),
            file_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided,
    /// else the default one. A missing file is created with the current
    /// values.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            debug!("Loading configuration from {}...", file_path.display());
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.api_url = data.api_url;
            self.theme_name = data.theme_name;
        } else {
            info!("Creating configuration file at {}...", file_path.display());
            self.save()?;
        }

        Ok(())
    }

    /// Serialize the configuration and write it to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            api_url: self.api_url.clone(),
            theme_name: self.theme_name.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Resolve the configured theme.
    ///
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Theme::from_name(&self.theme_name)
            .ok_or_else(|| ConfigError::UnknownTheme(self.theme_name.clone()))
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("movies-tui-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_first_load_creates_file_with_defaults() {
        let dir = temp_dir("create");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();

        let written = fs::read_to_string(dir.join(FILE_NAME)).unwrap();
        assert!(written.contains(DEFAULT_API_URL));
        assert!(written.contains("tokyo-night"));
        assert_eq!(config.file_path(), Some(dir.join(FILE_NAME).as_path()));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_reads_existing_values() {
        let dir = temp_dir("read");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "api_url: http://localhost:4000/api\ntheme_name: dracula\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.api_url, "http://localhost:4000/api");
        assert_eq!(config.theme().unwrap().name, "dracula");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let dir = temp_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "theme_name: rose-pine-dawn\n").unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.theme_name, "rose-pine-dawn");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = temp_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "theme_name: [unclosed\n").unwrap();

        let result = Config::new().load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_without_path_fails() {
        assert!(matches!(
            Config::new().save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn test_unknown_theme() {
        let config = Config {
            theme_name: "solarized".to_string(),
            ..Config::new()
        };
        assert!(matches!(config.theme(), Err(ConfigError::UnknownTheme(_))));
    }
}
