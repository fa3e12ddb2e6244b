use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

pub const DEFAULT_ID_PREFIX: &str = "cand";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationConfig {
    /// Prefix of generated candidate ids (`<prefix>-<stamp>-<index>`).
    pub id_prefix: String,
    /// Compute properties of surviving proposals on the rayon pool.
    pub parallel: bool,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            parallel: true,
        }
    }
}

#[derive(Default)]
pub struct VerificationConfigBuilder {
    id_prefix: Option<String>,
    parallel: Option<bool>,
}

impl VerificationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = Some(prefix.into());
        self
    }
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    pub fn build(self) -> Result<VerificationConfig, ConfigError> {
        let id_prefix = self
            .id_prefix
            .ok_or(ConfigError::MissingParameter("id_prefix"))?;
        if id_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                parameter: "id_prefix",
                reason: "must not be empty".to_string(),
            });
        }
        if id_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                parameter: "id_prefix",
                reason: "must not contain whitespace".to_string(),
            });
        }
        Ok(VerificationConfig {
            id_prefix,
            parallel: self
                .parallel
                .ok_or(ConfigError::MissingParameter("parallel"))?,
        })
    }
}
