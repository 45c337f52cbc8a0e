use std::net::IpAddr;

use anyhow::Context;
use hop_core::AppConfig;
use hop_geoip::{is_private_ip, GeoIpClient, IpLocation};

pub(crate) async fn run_locate(config: &AppConfig, ip: &str) -> anyhow::Result<()> {
    let location = if is_private_ip(ip) {
        tracing::debug!(ip, "private address, skipping lookup");
        IpLocation::private()
    } else {
        ip.parse::<IpAddr>()
            .with_context(|| format!("'{ip}' is not an IP address"))?;
        let client =
            GeoIpClient::with_base_url(&config.geoip_base_url, config.geoip_timeout_secs)?;
        client.lookup(ip).await?
    };
    println!("{}", serde_json::to_string_pretty(&location)?);
    Ok(())
}
