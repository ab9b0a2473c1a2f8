use thiserror::Error;

/// Ошибки конфигурации диалога настроек.
///
/// Обнаруживаются при сборке композиции (до первого рендера) и фатальны для неё.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Duplicate tab key: {0}")]
    DuplicateTabKey(String),

    #[error("No panel registered for tab: {0}")]
    MissingPanel(String),

    #[error("Tab registry is empty")]
    EmptyRegistry,

    #[error("Invalid dialog config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        ConfigurationError::InvalidConfig(err.to_string())
    }
}
