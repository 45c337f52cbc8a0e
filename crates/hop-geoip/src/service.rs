use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::client::GeoIpClient;
use crate::privacy::is_private_ip;
use crate::types::IpLocation;

/// Upper bound on cached addresses once expired entries have been pruned.
const MAX_CACHED_ENTRIES: usize = 10_000;

#[derive(Debug, Clone)]
struct CachedLocation {
    location: IpLocation,
    fetched_at: Instant,
}

/// IP → location lookups with a per-IP TTL cache.
///
/// Never fails: private addresses short-circuit, and unparseable addresses and
/// API errors degrade to [`IpLocation::fallback`], which is not cached.
#[derive(Debug)]
pub struct IpLocationService {
    client: GeoIpClient,
    ttl: Duration,
    cache: Mutex<HashMap<String, CachedLocation>>,
}

impl IpLocationService {
    #[must_use]
    pub fn new(client: GeoIpClient, ttl: Duration) -> Self {
        Self {
            client,
            ttl,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub async fn locate(&self, ip: &str) -> IpLocation {
        if is_private_ip(ip) {
            tracing::debug!(ip, "private IP, skipping geolocation");
            return IpLocation::private();
        }

        if ip.trim().parse::<IpAddr>().is_err() {
            tracing::debug!(ip, "not an IP address, skipping geolocation");
            return IpLocation::fallback();
        }

        if let Some(cached) = self.cached(ip).await {
            tracing::debug!(ip, "using cached location");
            return cached;
        }

        match self.client.lookup(ip).await {
            Ok(location) => {
                tracing::debug!(ip, country = ?location.country, "resolved caller location");
                self.store(ip, &location).await;
                location
            }
            Err(e) => {
                tracing::warn!(ip, error = %e, "IP geolocation failed, using fallback");
                IpLocation::fallback()
            }
        }
    }

    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
        tracing::info!("IP location cache cleared");
    }

    pub async fn cached_entries(&self) -> usize {
        self.cache.lock().await.len()
    }

    async fn store(&self, ip: &str, location: &IpLocation) {
        let mut cache = self.cache.lock().await;
        cache.retain(|_, entry| entry.fetched_at.elapsed() < self.ttl);

        if cache.len() >= MAX_CACHED_ENTRIES && !cache.contains_key(ip) {
            let oldest = cache
                .iter()
                .min_by_key(|(_, entry)| entry.fetched_at)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                cache.remove(&oldest);
            }
        }

        cache.insert(
            ip.to_owned(),
            CachedLocation {
                location: location.clone(),
                fetched_at: Instant::now(),
            },
        );
    }

    async fn cached(&self, ip: &str) -> Option<IpLocation> {
        let mut cache = self.cache.lock().await;
        match cache.get(ip) {
            Some(entry) if entry.fetched_at.elapsed() < self.ttl => Some(entry.location.clone()),
            Some(_) => {
                cache.remove(ip);
                None
            }
            None => None,
        }
    }
}
