//! Configuration loading for the terra Earth dashboard.
//!
//! Settings live in `config.toml` under the platform config directory. A
//! missing file means defaults; a malformed one is an error.

mod layout;
mod timings;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use terra_core::{ColorTheme, FactList};

pub use layout::LayoutConfig;
pub use timings::Timings;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine a configuration directory for this platform")]
    NoConfigDir,
    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Accent color.
    pub color_theme: ColorTheme,
    /// Draw the parallax starfield behind the scene.
    pub background: bool,
    /// Ring the terminal bell when the earth or sun is tapped.
    pub haptics: bool,
    /// Log level for the log file (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// Replaces the built-in facts when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facts: Option<Vec<String>>,
    pub layout: LayoutConfig,
    pub timings: Timings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::default(),
            background: true,
            haptics: false,
            log_level: "info".to_string(),
            facts: None,
            layout: LayoutConfig::default(),
            timings: Timings::default(),
        }
    }
}

impl Config {
    /// Platform project directories for terra.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "terra")
    }

    /// Default location of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_at(Self::path().ok().as_deref())
    }

    /// Load from `path`, or use defaults when there is no config location.
    pub fn load_at(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                log::warn!(target: "config", "no config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!(target: "config", "no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject values the dashboard cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_filter()?;
        self.fact_list()?;
        self.timings.validate()
    }

    pub fn log_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::Invalid(format!("unknown log level `{}`", self.log_level)))
    }

    /// Configured facts, or the built-in list.
    pub fn fact_list(&self) -> Result<FactList, ConfigError> {
        match &self.facts {
            Some(facts) => FactList::new(facts.clone())
                .map_err(|e| ConfigError::Invalid(format!("facts: {e}"))),
            None => Ok(FactList::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("terra-config-test-{}-{name}", std::process::id()))
            .join(CONFIG_FILE)
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.color_theme, ColorTheme::Cyan);
        assert!(config.background);
        assert!(!config.haptics);
        assert_eq!(config.log_filter().unwrap(), LevelFilter::Info);
        assert_eq!(config.fact_list().unwrap().len(), 15);
        assert_eq!(config.timings.fact_interval(), Duration::from_millis(4000));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
color_theme = "magenta"
haptics = true

[timings]
jitter_interval_ms = 5000
"#,
        )
        .unwrap();
        assert_eq!(config.color_theme, ColorTheme::Magenta);
        assert!(config.haptics);
        assert_eq!(config.timings.jitter_interval(), Duration::from_secs(5));
        assert_eq!(config.timings.fact_fade(), Duration::from_millis(500));
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = scratch_path("missing");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_no_config_dir_falls_back_to_defaults() {
        assert_eq!(Config::load_at(None).unwrap(), Config::default());
    }

    #[test]
    fn test_load_at_reads_file() {
        let path = scratch_path("load-at");
        let config = Config {
            haptics: true,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_at(Some(&path)).unwrap(), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("save");
        let config = Config {
            color_theme: ColorTheme::Yellow,
            facts: Some(vec!["The Earth is round".to_string()]),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = scratch_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "color_theme = [").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_empty_fact_override_rejected() {
        let config = Config {
            facts: Some(Vec::new()),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
