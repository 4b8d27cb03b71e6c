use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::model::FolioConfig;

const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";

/// Status describing how the configuration was loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the configuration from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: FolioConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(config: FolioConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (FolioConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

pub(crate) fn load_config() -> Result<ConfigLoad, ConfigError> {
    load_config_from_path(&config_path())
}

pub(crate) fn load_config_from_path(
    path: &Path,
) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                FolioConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<FolioConfig>(&data) {
        Ok(config) => Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded)),
        Err(err) => Ok(ConfigLoad::new(
            FolioConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

pub(crate) fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("folio")
            .join("config.json");
    }

    std::env::temp_dir().join("folio").join("config.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{ConfigLoadStatus, load_config_from_path};
    use crate::config::model::{FolioConfig, ThemeVariant};

    #[test]
    fn given_missing_file_when_load_then_returns_default_with_missing_status() {
        let root = test_temp_dir("missing");

        let loaded = load_config_from_path(&root.join("config.json"))
            .expect("missing config should not be an io error");
        let (config, status) = loaded.into_parts();

        assert_eq!(status, ConfigLoadStatus::Missing);
        assert_eq!(config, FolioConfig::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_valid_file_when_load_then_config_is_loaded() {
        let root = test_temp_dir("valid");
        let path = root.join("config.json");
        fs::write(&path, r#"{"theme":"indigo","hidden_sections":["contact"]}"#)
            .expect("test payload should be written");

        let (config, status) = load_config_from_path(&path)
            .expect("config should load")
            .into_parts();

        assert_eq!(status, ConfigLoadStatus::Loaded);
        assert_eq!(config.theme, ThemeVariant::Indigo);
        assert_eq!(config.hidden_sections, vec![String::from("contact")]);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("config.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let (config, status) = load_config_from_path(&path)
            .expect("invalid config should not be an io error")
            .into_parts();

        assert_eq!(config, FolioConfig::default());
        match status {
            ConfigLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_directory_instead_of_file_when_load_then_io_error_is_returned() {
        let root = test_temp_dir("directory");

        assert!(load_config_from_path(&root).is_err());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "folio-config-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
