use axum::{extract::State, response::IntoResponse, Json};
use hop_core::PlaceRecord;
use serde::Serialize;

use super::AppState;

#[derive(Debug, Serialize)]
pub(super) struct CountriesResponse {
    success: bool,
    data: Vec<PlaceRecord>,
    total: usize,
}

pub(super) async fn list_countries(State(state): State<AppState>) -> impl IntoResponse {
    let data = state.analyzer.all_countries();
    Json(CountriesResponse {
        success: true,
        total: data.len(),
        data,
    })
}
