use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Which opponent sits across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    /// The pre-trained MLP regressor loaded from `model.path`.
    Mlp,
    /// Uniform random legal moves; needs no model artifact.
    Random,
}

/// Model artifact settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            path: PathBuf::from("model.json"),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub opponent: OpponentKind,
    pub model: ModelConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            opponent: OpponentKind::Mlp,
            model: ModelConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.opponent == OpponentKind::Mlp && self.model.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "model.path must not be empty when opponent = \"mlp\"".into(),
            ));
        }
        Ok(())
    }
}
