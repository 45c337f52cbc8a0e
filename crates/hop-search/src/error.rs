use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The query was missing, empty, or not a string.
    #[error("Invalid query")]
    InvalidQuery,

    #[error("gazetteer error: {0}")]
    Gazetteer(#[from] hop_core::ConfigError),
}
