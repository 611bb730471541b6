//! Configuration module

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Directory holding `<disease>_model.json` artifacts
    pub models_dir: PathBuf,

    /// Environment (development, production)
    pub environment: String,

    /// Log output: `pretty` or `json`
    pub log_format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),

            models_dir: lookup("MODELS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("models")),

            environment: lookup("ENVIRONMENT")
                .unwrap_or_else(|| "development".to_string()),

            log_format: lookup("LOG_FORMAT")
                .unwrap_or_else(|| "pretty".to_string()),
        }
    }

    /// Check if logs should be emitted as JSON lines
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
