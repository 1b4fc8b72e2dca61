// History configuration, loaded from RON

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid history config: {0}")]
    Parse(String),

    #[error("max_history must be at least 1")]
    ZeroHistory,
}

/// Settings for a History
///
/// ```
/// use sync_edit::config::HistoryConfig;
///
/// let config = HistoryConfig::from_ron_str("(max_history: Some(64))").unwrap();
/// assert_eq!(config.max_history, Some(64));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of undo steps kept (None = unbounded)
    pub max_history: Option<usize>,
}

impl HistoryConfig {
    pub fn from_ron_str(ron_data: &str) -> Result<Self, ConfigError> {
        let config: Self =
            ron::from_str(ron_data).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// A limit of zero would drop each edit as soon as it is applied
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.max_history {
            Some(0) => Err(ConfigError::ZeroHistory),
            _ => Ok(()),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }
}
