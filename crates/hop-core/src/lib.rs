//! Shared domain values and configuration for the House of Paradise search stack.

pub mod app_config;
pub mod config;
pub mod places;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use places::{load_gazetteer_file, GazetteerFile, MatchPolicy, PlaceEntry, PlaceRecord};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read gazetteer file {path}: {source}")]
    GazetteerFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse gazetteer file: {0}")]
    GazetteerFileParse(#[from] serde_yaml::Error),

    #[error("gazetteer validation failed: {0}")]
    Validation(String),
}
