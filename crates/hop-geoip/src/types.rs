use hop_search::UserLocation;
use serde::{Deserialize, Serialize};

/// Raw ip-api.com response for the fields we request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IpApiResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Where a caller appears to be.
///
/// Private addresses and failed lookups carry no country; `is_fallback` marks
/// the latter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpLocation {
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    pub is_private: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_fallback: bool,
}

impl IpLocation {
    #[must_use]
    pub fn private() -> Self {
        Self {
            is_private: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn fallback() -> Self {
        Self {
            is_fallback: true,
            ..Self::default()
        }
    }

    /// The caller location handed to the search analyzer, when a country is known.
    #[must_use]
    pub fn user_location(&self) -> Option<UserLocation> {
        self.country
            .as_ref()
            .filter(|country| !country.is_empty())
            .map(|country| UserLocation {
                country: country.clone(),
                is_private: self.is_private,
            })
    }
}

impl From<IpApiResponse> for IpLocation {
    fn from(raw: IpApiResponse) -> Self {
        Self {
            country: raw.country,
            country_code: raw.country_code,
            city: raw.city,
            region: raw.region_name,
            lat: raw.lat,
            lon: raw.lon,
            is_private: false,
            is_fallback: false,
        }
    }
}
