//! `IpLocationService` caching and fallback behaviour against wiremock.

use std::time::Duration;

use hop_geoip::{GeoIpClient, IpLocationService};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(server: &MockServer, ttl: Duration) -> IpLocationService {
    let client = GeoIpClient::with_base_url(&server.uri(), 5).expect("client");
    IpLocationService::new(client, ttl)
}

fn japan() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "status": "success",
        "country": "Japan",
        "countryCode": "JP",
        "regionName": "Tokyo",
        "city": "Tokyo",
        "lat": 35.68,
        "lon": 139.69
    }))
}

#[tokio::test]
async fn private_ip_never_hits_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(japan())
        .expect(0)
        .mount(&server)
        .await;

    let service = service(&server, Duration::from_secs(60));
    let location = service.locate("192.168.1.20").await;

    assert!(location.is_private);
    assert!(location.country.is_none());
    assert!(location.user_location().is_none());
}

#[tokio::test]
async fn successful_lookup_is_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/203.0.113.9"))
        .respond_with(japan())
        .expect(1)
        .mount(&server)
        .await;

    let service = service(&server, Duration::from_secs(60));
    let first = service.locate("203.0.113.9").await;
    let second = service.locate("203.0.113.9").await;

    assert_eq!(first, second);
    assert_eq!(first.country.as_deref(), Some("Japan"));
    assert_eq!(service.cached_entries().await, 1);
}

#[tokio::test]
async fn expired_entries_are_refetched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(japan())
        .expect(2)
        .mount(&server)
        .await;

    let service = service(&server, Duration::ZERO);
    service.locate("203.0.113.9").await;
    service.locate("203.0.113.9").await;
}

#[tokio::test]
async fn failures_fall_back_and_are_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let service = service(&server, Duration::from_secs(60));
    let location = service.locate("203.0.113.9").await;
    assert!(location.is_fallback);
    assert!(!location.is_private);
    assert!(location.country.is_none());

    service.locate("203.0.113.9").await;
    assert_eq!(service.cached_entries().await, 0);
}

#[tokio::test]
async fn clear_cache_forces_a_new_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(japan())
        .expect(2)
        .mount(&server)
        .await;

    let service = service(&server, Duration::from_secs(60));
    service.locate("203.0.113.9").await;
    service.clear_cache().await;
    assert_eq!(service.cached_entries().await, 0);
    service.locate("203.0.113.9").await;
}

#[tokio::test]
async fn expired_entries_are_pruned_when_new_addresses_arrive() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(japan())
        .mount(&server)
        .await;

    let service = service(&server, Duration::ZERO);
    for last in 1..=200u8 {
        service.locate(&format!("203.0.113.{last}")).await;
    }

    assert!(service.cached_entries().await <= 1);
}

#[tokio::test]
async fn non_address_input_never_hits_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(japan())
        .expect(0)
        .mount(&server)
        .await;

    let service = service(&server, Duration::from_secs(60));
    for ip in ["../admin/secret", "", "8.8.8.8/../../admin"] {
        let location = service.locate(ip).await;
        assert!(location.is_fallback, "{ip:?}");
        assert!(location.country.is_none(), "{ip:?}");
        assert!(location.user_location().is_none(), "{ip:?}");
    }
    assert_eq!(service.cached_entries().await, 0);
}
