use super::config::ConfigError;
use super::source::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to obtain candidate proposals: {source}")]
    Source {
        #[from]
        source: SourceError,
    },

    #[error("Invalid verification configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
