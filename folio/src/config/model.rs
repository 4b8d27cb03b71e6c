use serde::Deserialize;

use crate::widgets::navigation::model::{MotionPreference, SectionId};

/// Palette variant of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ThemeVariant {
    #[default]
    Crimson,
    Indigo,
}

impl ThemeVariant {
    pub(crate) fn id(self) -> &'static str {
        match self {
            ThemeVariant::Crimson => "crimson",
            ThemeVariant::Indigo => "indigo",
        }
    }
}

/// Startup configuration. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct FolioConfig {
    pub(crate) theme: ThemeVariant,
    pub(crate) reduced_motion: bool,
    pub(crate) hidden_sections: Vec<String>,
}

impl FolioConfig {
    pub(crate) fn motion(&self) -> MotionPreference {
        if self.reduced_motion {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    /// Sections whose panels are left out of the page.
    ///
    /// Unknown ids are ignored here; they are reported once at load time.
    pub(crate) fn hidden_sections(&self) -> Vec<SectionId> {
        self.hidden_sections
            .iter()
            .filter_map(|anchor| SectionId::from_anchor(anchor))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{FolioConfig, ThemeVariant};
    use crate::widgets::navigation::model::{MotionPreference, SectionId};

    #[test]
    fn given_empty_object_when_parsed_then_defaults_are_used() {
        let config: FolioConfig =
            serde_json::from_str("{}").expect("empty config should parse");

        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.theme, ThemeVariant::Crimson);
        assert_eq!(config.motion(), MotionPreference::Full);
    }

    #[test]
    fn given_full_config_when_parsed_then_fields_are_applied() {
        let config: FolioConfig = serde_json::from_str(
            r#"{
                "theme": "indigo",
                "reduced_motion": true,
                "hidden_sections": ["skills", "about"],
                "unknown": 1
            }"#,
        )
        .expect("config should parse");

        assert_eq!(config.theme, ThemeVariant::Indigo);
        assert_eq!(config.motion(), MotionPreference::Reduced);
        assert_eq!(config.hidden_sections(), vec![SectionId::Skills]);
    }

    #[test]
    fn given_unknown_theme_when_parsed_then_error_is_reported() {
        assert!(serde_json::from_str::<FolioConfig>(r#"{"theme":"teal"}"#)
            .is_err());
    }
}
