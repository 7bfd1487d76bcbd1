use crate::errors::ConfigurationError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    /// A zone name or one of its static records would not register.
    #[error("Zone '{zone}': {source}")]
    Zone {
        zone: String,
        #[source]
        source: ConfigurationError,
    },
}
