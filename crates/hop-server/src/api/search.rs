use std::net::{IpAddr, SocketAddr};

use axum::{
    body::to_bytes,
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use hop_geoip::client_ip;
use hop_search::{ErrorResult, SearchError, UserLocation};
use serde_json::Value;

use super::AppState;
use crate::middleware::RequestId;

const MAX_BODY_BYTES: usize = 16 * 1024;

/// `POST /api/smart-search` with body `{"query": "..."}`.
///
/// Anything other than a non-empty string query is rejected with 400. The
/// caller's IP location, when available, seeds the trip origin.
pub(super) async fn smart_search(State(state): State<AppState>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let request_id = parts
        .extensions
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();

    let Ok(bytes) = to_bytes(body, MAX_BODY_BYTES).await else {
        return invalid_query();
    };
    let Some(query) = extract_query(&bytes) else {
        return invalid_query();
    };

    let peer = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());
    let user_location = locate_caller(&state, &parts.headers, peer).await;

    match state.analyzer.analyze(&query, user_location.as_ref()) {
        Ok(result) => {
            tracing::debug!(
                request_id = %request_id,
                intent = %result.intent(),
                "smart search answered"
            );
            Json(result).into_response()
        }
        Err(SearchError::InvalidQuery) => invalid_query(),
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "smart search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResult::new("Failed to analyze search query")),
            )
                .into_response()
        }
    }
}

fn extract_query(bytes: &[u8]) -> Option<String> {
    let body: Value = serde_json::from_slice(bytes).ok()?;
    body.get("query")
        .and_then(Value::as_str)
        .filter(|query| !query.is_empty())
        .map(ToOwned::to_owned)
}

async fn locate_caller(
    state: &AppState,
    headers: &HeaderMap,
    peer: Option<IpAddr>,
) -> Option<UserLocation> {
    let geoip = state.geoip.as_ref()?;
    let ip = client_ip(
        header_str(headers, "x-forwarded-for"),
        header_str(headers, "x-real-ip"),
        peer,
    );
    geoip.locate(&ip).await.user_location()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn invalid_query() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResult::new(SearchError::InvalidQuery.to_string())),
    )
        .into_response()
}
