//! Конфигурация диалога настроек.

use super::errors::ConfigurationError;
use super::i18n::Locale;
use super::viewport::Breakpoints;
use crate::enums::settings_tab::SettingsTab;
use serde::{Deserialize, Deserializer, Serialize};

/// Визуальная ориентация полосы табов. Меняет только расположение, не поведение.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub breakpoints: Breakpoints,
    /// Неизвестный ключ не ошибка: превращается в `None` (первый таб).
    #[serde(deserialize_with = "lenient_tab")]
    pub default_tab: Option<SettingsTab>,
    pub orientation: Orientation,
    /// Переопределяет язык браузера
    pub locale: Option<Locale>,
}

fn lenient_tab<'de, D>(deserializer: D) -> Result<Option<SettingsTab>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(SettingsTab::from_key))
}

impl DialogConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let config: DialogConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Значение `default_tab` из JSON, которое было отброшено как неизвестное.
    pub fn ignored_default_tab(json: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(json).ok()?;
        let raw = value.get("default_tab")?.as_str()?;
        SettingsTab::from_key(raw)
            .is_none()
            .then(|| raw.to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let bp = &self.breakpoints;
        if bp.wide_min_width_px == 0 || bp.mobile_min_width_px == 0 {
            return Err(ConfigurationError::InvalidConfig(
                "breakpoint widths must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = DialogConfig::from_json("{}").unwrap();
        assert_eq!(config, DialogConfig::default());
        assert_eq!(config.breakpoints.wide_min_width_px, 800);
        assert_eq!(config.breakpoints.mobile_min_width_px, 768);
        assert_eq!(config.orientation, Orientation::Vertical);
    }

    #[test]
    fn test_partial_json() {
        let config = DialogConfig::from_json(
            r#"{ "default_tab": "video", "breakpoints": { "wide_min_width_px": 1024 }, "locale": "fr" }"#,
        )
        .unwrap();
        assert_eq!(config.default_tab, Some(SettingsTab::Video));
        assert_eq!(config.breakpoints.wide_min_width_px, 1024);
        assert_eq!(config.breakpoints.mobile_min_width_px, 768);
        assert_eq!(config.locale, Some(Locale::Fr));
    }

    #[test]
    fn test_unknown_default_tab_keeps_rest_of_config() {
        let json = r#"{ "default_tab": "Unknown", "locale": "fr", "breakpoints": { "wide_min_width_px": 1024 } }"#;
        let config = DialogConfig::from_json(json).unwrap();
        assert_eq!(config.default_tab, None);
        assert_eq!(config.locale, Some(Locale::Fr));
        assert_eq!(config.breakpoints.wide_min_width_px, 1024);
        assert_eq!(config.breakpoints.mobile_min_width_px, 768);
        assert_eq!(
            DialogConfig::ignored_default_tab(json),
            Some("Unknown".to_string())
        );
    }

    #[test]
    fn test_known_or_absent_default_tab_not_ignored() {
        assert_eq!(DialogConfig::ignored_default_tab(r#"{ "default_tab": "audio" }"#), None);
        assert_eq!(DialogConfig::ignored_default_tab(r#"{ "default_tab": null }"#), None);
        assert_eq!(DialogConfig::ignored_default_tab("{}"), None);
    }

    #[test]
    fn test_null_default_tab() {
        let config = DialogConfig::from_json(r#"{ "default_tab": null }"#).unwrap();
        assert_eq!(config.default_tab, None);
    }

    #[test]
    fn test_zero_breakpoint_rejected() {
        let err = DialogConfig::from_json(r#"{ "breakpoints": { "mobile_min_width_px": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidConfig(_)));
    }

    #[test]
    fn test_orientation_parsed() {
        let config = DialogConfig::from_json(r#"{ "orientation": "horizontal" }"#).unwrap();
        assert_eq!(config.orientation, Orientation::Horizontal);
    }
}
