use std::net::SocketAddr;
use std::path::PathBuf;

use crate::places::MatchPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Optional YAML file that replaces the built-in gazetteer.
    pub gazetteer_path: Option<PathBuf>,
    pub match_policy: MatchPolicy,
    pub geoip_enabled: bool,
    pub geoip_base_url: String,
    pub geoip_timeout_secs: u64,
    pub geoip_cache_ttl_secs: u64,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
}
