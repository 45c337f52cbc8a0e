use crate::app_config::{AppConfig, Environment};
use crate::places::MatchPolicy;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::str::FromStr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        match or_default(var, default).trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected a boolean, got '{other}'"),
            }),
        }
    };

    let env = parse_environment(&or_default("HOP_ENV", "development"));

    let bind_addr = parse("HOP_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("HOP_LOG_LEVEL", "info");
    let gazetteer_path = lookup("HOP_GAZETTEER_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let match_policy = MatchPolicy::from_str(&or_default("HOP_MATCH_POLICY", "substring"))
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "HOP_MATCH_POLICY".to_string(),
            reason,
        })?;

    let geoip_enabled = parse_bool("HOP_GEOIP_ENABLED", "true")?;
    let geoip_base_url = or_default("HOP_GEOIP_BASE_URL", "http://ip-api.com");
    let geoip_timeout_secs = parse_u64("HOP_GEOIP_TIMEOUT_SECS", "3")?;
    let geoip_cache_ttl_secs = parse_u64("HOP_GEOIP_CACHE_TTL_SECS", "86400")?;

    let rate_limit_max_requests = parse_usize("HOP_RATE_LIMIT_MAX_REQUESTS", "500")?;
    let rate_limit_window_secs = parse_u64("HOP_RATE_LIMIT_WINDOW_SECS", "60")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        gazetteer_path,
        match_policy,
        geoip_enabled,
        geoip_base_url,
        geoip_timeout_secs,
        geoip_cache_ttl_secs,
        rate_limit_max_requests,
        rate_limit_window_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_test() {
        assert_eq!(parse_environment("test"), Environment::Test);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn build_app_config_uses_defaults_for_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.gazetteer_path.is_none());
        assert_eq!(cfg.match_policy, MatchPolicy::Substring);
        assert!(cfg.geoip_enabled);
        assert_eq!(cfg.geoip_base_url, "http://ip-api.com");
        assert_eq!(cfg.geoip_timeout_secs, 3);
        assert_eq!(cfg.geoip_cache_ttl_secs, 86_400);
        assert_eq!(cfg.rate_limit_max_requests, 500);
        assert_eq!(cfg.rate_limit_window_secs, 60);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = HashMap::new();
        map.insert("HOP_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOP_BIND_ADDR"),
            "expected InvalidEnvVar(HOP_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_reads_word_match_policy() {
        let mut map = HashMap::new();
        map.insert("HOP_MATCH_POLICY", "word");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.match_policy, MatchPolicy::WordBoundary);
    }

    #[test]
    fn build_app_config_rejects_unknown_match_policy() {
        let mut map = HashMap::new();
        map.insert("HOP_MATCH_POLICY", "fuzzy");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOP_MATCH_POLICY"),
            "expected InvalidEnvVar(HOP_MATCH_POLICY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_disables_geoip() {
        let mut map = HashMap::new();
        map.insert("HOP_GEOIP_ENABLED", "false");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(!cfg.geoip_enabled);
    }

    #[test]
    fn build_app_config_rejects_non_boolean_geoip_flag() {
        let mut map = HashMap::new();
        map.insert("HOP_GEOIP_ENABLED", "maybe");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOP_GEOIP_ENABLED"),
            "expected InvalidEnvVar(HOP_GEOIP_ENABLED), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_invalid_rate_limit() {
        let mut map = HashMap::new();
        map.insert("HOP_RATE_LIMIT_MAX_REQUESTS", "lots");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOP_RATE_LIMIT_MAX_REQUESTS"),
            "expected InvalidEnvVar(HOP_RATE_LIMIT_MAX_REQUESTS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_ignores_blank_gazetteer_path() {
        let mut map = HashMap::new();
        map.insert("HOP_GAZETTEER_PATH", "  ");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.gazetteer_path.is_none());
    }

    #[test]
    fn build_app_config_reads_gazetteer_path_and_geoip_overrides() {
        let mut map = HashMap::new();
        map.insert("HOP_GAZETTEER_PATH", "./config/places.yaml");
        map.insert("HOP_GEOIP_BASE_URL", "http://127.0.0.1:9999");
        map.insert("HOP_GEOIP_TIMEOUT_SECS", "7");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.gazetteer_path.as_deref(),
            Some(std::path::Path::new("./config/places.yaml"))
        );
        assert_eq!(cfg.geoip_base_url, "http://127.0.0.1:9999");
        assert_eq!(cfg.geoip_timeout_secs, 7);
    }
}
