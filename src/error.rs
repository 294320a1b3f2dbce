use std::path::PathBuf;

/// Errors that can occur when loading or validating a model weight file.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse model file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("model shape error: {0}")]
    Shape(String),
}

/// Errors that can occur when an agent is asked to produce a move.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("no legal move: the board is full")]
    NoLegalMove,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_display() {
        let err = ModelError::Shape("layer 0 expects 9 inputs, got 4 rows".to_string());
        assert_eq!(
            err.to_string(),
            "model shape error: layer 0 expects 9 inputs, got 4 rows"
        );
    }

    #[test]
    fn test_agent_error_display() {
        let err = AgentError::NoLegalMove;
        assert_eq!(err.to_string(), "no legal move: the board is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("model.path must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: model.path must not be empty"
        );
    }
}
