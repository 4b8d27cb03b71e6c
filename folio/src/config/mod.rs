mod errors;
mod model;
mod storage;

pub(crate) use self::model::{FolioConfig, ThemeVariant};
use self::storage::{ConfigLoadStatus, config_path, load_config};
use crate::widgets::navigation::model::SectionId;

const REDUCED_MOTION_ENV: &str = "FOLIO_REDUCED_MOTION";

/// Load the startup configuration, falling back to defaults on any problem.
pub(crate) fn load() -> FolioConfig {
    let mut config = match load_config() {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => {
                    log::info!("config loaded from {}", config_path().display());
                },
                ConfigLoadStatus::Missing => {
                    log::debug!("no config at {}", config_path().display());
                },
                ConfigLoadStatus::Invalid(reason) => {
                    log::warn!("config ignored, using defaults: {reason}");
                },
            }
            config
        },
        Err(err) => {
            log::warn!("{err}; using defaults");
            FolioConfig::default()
        },
    };

    if reduced_motion_from_env(std::env::var(REDUCED_MOTION_ENV).ok()) {
        config.reduced_motion = true;
    }

    warn_hidden_sections(&config);
    config
}

fn reduced_motion_from_env(value: Option<String>) -> bool {
    value
        .map(|value| {
            matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true")
        })
        .unwrap_or(false)
}

fn warn_hidden_sections(config: &FolioConfig) {
    for anchor in &config.hidden_sections {
        match SectionId::from_anchor(anchor) {
            Some(_) => log::warn!(
                "section `{anchor}` is hidden; its nav item will not scroll"
            ),
            _ => log::warn!("unknown hidden section `{anchor}` ignored"),
        }
    }
}
