//! HTTP client for the ip-api.com JSON endpoint.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeoIpError;
use crate::types::{IpApiResponse, IpLocation};

pub const DEFAULT_BASE_URL: &str = "http://ip-api.com";

const LOOKUP_FIELDS: &str = "status,message,country,countryCode,regionName,city,lat,lon";

/// Client for the geolocation API.
///
/// Use [`GeoIpClient::new`] for production or [`GeoIpClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct GeoIpClient {
    client: Client,
    base_url: Url,
}

impl GeoIpClient {
    /// # Errors
    ///
    /// Returns [`GeoIpError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, GeoIpError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs)
    }

    /// # Errors
    ///
    /// Returns [`GeoIpError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeoIpError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, GeoIpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("house-of-paradise/0.1 (smart-search)")
            .build()?;

        // Trailing slash so `join("json/..")` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GeoIpError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Looks up the location of a single public IP.
    ///
    /// # Errors
    ///
    /// - [`GeoIpError::Http`] on network failure or timeout.
    /// - [`GeoIpError::UnexpectedStatus`] on a non-2xx response.
    /// - [`GeoIpError::Deserialize`] if the body is not the expected JSON.
    /// - [`GeoIpError::LookupFailed`] if the API reports a failed lookup.
    pub async fn lookup(&self, ip: &str) -> Result<IpLocation, GeoIpError> {
        let url = self.build_url(ip)?;
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoIpError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let raw: IpApiResponse =
            serde_json::from_str(&body).map_err(|e| GeoIpError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        if raw.status != "success" {
            return Err(GeoIpError::LookupFailed {
                ip: ip.to_owned(),
                message: raw.message.unwrap_or_else(|| raw.status.clone()),
            });
        }

        Ok(IpLocation::from(raw))
    }

    fn build_url(&self, ip: &str) -> Result<Url, GeoIpError> {
        let mut url = self
            .base_url
            .join(&format!("json/{ip}"))
            .map_err(|e| GeoIpError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut().append_pair("fields", LOOKUP_FIELDS);
        Ok(url)
    }
}
