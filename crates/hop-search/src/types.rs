use hop_core::PlaceRecord;
use serde::{Deserialize, Serialize};

/// Fixed confidence attached to every trip result.
pub const TRIP_CONFIDENCE: f64 = 0.9;
/// Fixed confidence attached to hotel results that resolved through the builder.
pub const HOTEL_CONFIDENCE: f64 = 0.85;
/// Confidence of the hotel fallback used when nothing in the query was recognised.
pub const UNRESOLVED_CONFIDENCE: f64 = 0.3;

/// One gazetteer alias found in a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLocation {
    /// The alias that matched, exactly as stored in the gazetteer.
    pub alias: String,
    pub place: PlaceRecord,
}

/// Caller's own location, typically derived from IP geolocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLocation {
    pub country: String,
    pub is_private: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Trip,
    Hotel,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Trip => write!(f, "trip"),
            Intent::Hotel => write!(f, "hotel"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSearch {
    pub success: bool,
    pub from: Option<String>,
    pub from_code: Option<String>,
    pub to: Option<String>,
    pub to_code: Option<String>,
    pub confidence: f64,
    pub original_query: String,
    /// `true` only when `from` was filled in from the caller's location.
    pub user_location_detected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearch {
    pub success: bool,
    pub hotel_name: Option<String>,
    pub location: String,
    pub location_code: Option<String>,
    pub confidence: f64,
    pub original_query: String,
}

/// Classification outcome for a valid query.
///
/// Serializes with a `type` discriminator (`"trip"` or `"hotel"`) alongside
/// the variant's camelCase fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnalysisResult {
    Trip(TripSearch),
    Hotel(HotelSearch),
}

impl AnalysisResult {
    #[must_use]
    pub fn intent(&self) -> Intent {
        match self {
            AnalysisResult::Trip(_) => Intent::Trip,
            AnalysisResult::Hotel(_) => Intent::Hotel,
        }
    }

    #[must_use]
    pub fn as_trip(&self) -> Option<&TripSearch> {
        match self {
            AnalysisResult::Trip(trip) => Some(trip),
            AnalysisResult::Hotel(_) => None,
        }
    }

    #[must_use]
    pub fn as_hotel(&self) -> Option<&HotelSearch> {
        match self {
            AnalysisResult::Hotel(hotel) => Some(hotel),
            AnalysisResult::Trip(_) => None,
        }
    }
}

/// Wire body for a rejected query: `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    pub success: bool,
    pub error: String,
}

impl ErrorResult {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
