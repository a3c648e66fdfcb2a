use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CAPTURE_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    /// Base URL of the chat backend.
    pub backend_url: Option<String>,
    /// How long a speech-capture session may listen before it is cut off.
    pub capture_timeout_secs: Option<u64>,
    /// Recognition language tag handed to the capture backend.
    pub language: Option<String>,
    /// Where preview surface files are written; system temp dir if unset.
    pub preview_dir: Option<PathBuf>,
}

/// Errors that can occur when loading configuration from disk.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the configuration file as valid TOML.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read config at {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Failed to parse config at {}: {}", path.display(), source)
            }
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl Config {
    pub fn load() -> Result<Config, Box<dyn StdError>> {
        Self::load_from_path(&Self::config_path()?)
    }

    pub fn load_from_path(config_path: &Path) -> Result<Config, Box<dyn StdError>> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                path: config_path.to_path_buf(),
                source,
            })?;
            let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: config_path.to_path_buf(),
                source,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Write the config atomically: serialize to a temp file in the config
    /// directory, then rename over the old file.
    pub fn save(&self) -> Result<(), Box<dyn StdError>> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    pub fn save_to_path(&self, config_path: &Path) -> Result<(), Box<dyn StdError>> {
        let dir = config_path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;
        let contents = toml::to_string_pretty(self)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.persist(config_path)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf, Box<dyn StdError>> {
        let dirs = ProjectDirs::from("", "", "vitrine")
            .ok_or("Could not determine a configuration directory for this platform")?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn backend_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    pub fn capture_timeout(&self) -> Duration {
        Duration::from_secs(
            self.capture_timeout_secs
                .unwrap_or(DEFAULT_CAPTURE_TIMEOUT_SECS),
        )
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Directory preview surfaces are written to.
    pub fn preview_path(&self) -> PathBuf {
        self.preview_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }

    pub fn print_all(&self) {
        println!("backend-url: {}", self.backend_url());
        println!("capture-timeout: {}s", self.capture_timeout().as_secs());
        println!("language: {}", self.language());
        println!("preview-dir: {}", self.preview_path().display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::default();
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_URL);
        assert_eq!(config.capture_timeout(), Duration::from_secs(5));
        assert_eq!(config.language(), "en-US");
    }

    #[test]
    fn missing_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_path(&dir.path().join("config.toml")).unwrap();
        assert!(config.backend_url.is_none());
    }

    #[test]
    fn save_and_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            backend_url: Some("http://chat.local:8080".into()),
            capture_timeout_secs: Some(8),
            language: Some("fr-FR".into()),
            preview_dir: None,
        };
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.backend_url(), "http://chat.local:8080");
        assert_eq!(loaded.capture_timeout(), Duration::from_secs(8));
        assert_eq!(loaded.language(), "fr-FR");
    }

    #[test]
    fn invalid_toml_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "backend_url = [not toml").unwrap();
        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
