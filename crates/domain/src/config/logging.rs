use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Mount the query logger as the first root middleware.
    #[serde(default = "default_log_queries")]
    pub log_queries: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_queries: default_log_queries(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_queries() -> bool {
    true
}
