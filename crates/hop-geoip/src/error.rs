use thiserror::Error;

/// Errors returned by the IP geolocation client.
#[derive(Debug, Error)]
pub enum GeoIpError {
    /// Network, timeout or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("geolocation API returned HTTP {0}")]
    UnexpectedStatus(u16),

    /// The API answered but reported `"status": "fail"`.
    #[error("geolocation lookup failed for {ip}: {message}")]
    LookupFailed { ip: String, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid geolocation base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
