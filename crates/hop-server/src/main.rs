mod api;
mod middleware;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hop_geoip::{GeoIpClient, IpLocationService};
use hop_search::SmartSearchAnalyzer;
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    middleware::RateLimitState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = hop_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let analyzer = SmartSearchAnalyzer::from_config(&config)?;

    let geoip = if config.geoip_enabled {
        let client = GeoIpClient::with_base_url(&config.geoip_base_url, config.geoip_timeout_secs)?;
        Some(Arc::new(IpLocationService::new(
            client,
            Duration::from_secs(config.geoip_cache_ttl_secs),
        )))
    } else {
        tracing::info!("IP geolocation disabled");
        None
    };

    let rate_limit = RateLimitState::new(
        config.rate_limit_max_requests,
        Duration::from_secs(config.rate_limit_window_secs),
    );

    tracing::info!(
        env = %config.env,
        bind_addr = %config.bind_addr,
        gazetteer_entries = analyzer.gazetteer().len(),
        match_policy = %analyzer.policy(),
        "starting smart search server"
    );

    let app = build_app(AppState { analyzer, geoip }, rate_limit);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
