//! Assembles trip and hotel results once the intent is decided.

use std::sync::LazyLock;

use hop_core::PlaceRecord;
use regex::Regex;

use crate::gazetteer::Gazetteer;
use crate::matcher::PhraseMatcher;
use crate::types::{
    ExtractedLocation, HotelSearch, TripSearch, UserLocation, HOTEL_CONFIDENCE, TRIP_CONFIDENCE,
    UNRESOLVED_CONFIDENCE,
};

static HOTEL_NAME_FILLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(i want to go to|go to|stay at|book)").expect("valid hotel filler regex")
});

/// Assigns `from` and `to` roles to the extracted locations.
///
/// `query` is the lowercased, trimmed query the locations were extracted from.
pub(crate) fn build_trip_search(
    gazetteer: &Gazetteer,
    matcher: &impl PhraseMatcher,
    query: &str,
    locations: &[ExtractedLocation],
    user_location: Option<&UserLocation>,
) -> TripSearch {
    let from_idx = first_after(matcher, query, locations, "from", None);
    let to_idx = first_after(matcher, query, locations, "to", from_idx);

    let mut from: Option<&PlaceRecord> = from_idx.map(|i| &locations[i].place);
    let mut to: Option<&PlaceRecord> = to_idx.map(|i| &locations[i].place);
    let mut user_location_detected = false;

    if to.is_none() && from.is_none() && locations.len() >= 2 {
        from = Some(&locations[0].place);
        to = Some(&locations[1].place);
    } else if to.is_none() && locations.len() == 1 {
        to = Some(&locations[0].place);
        if let Some(home) = user_location
            .filter(|user| !user.is_private && !user.country.is_empty())
            .and_then(|user| gazetteer.resolve_country(&user.country))
        {
            tracing::debug!(origin = %home.name, "trip origin taken from user location");
            from = Some(home);
            user_location_detected = true;
        }
    } else if to.is_none() && locations.len() > 1 {
        // `from` resolved but nothing followed "to"; locations[0] may go unused.
        to = Some(&locations[1].place);
    }

    TripSearch {
        success: true,
        from: from.map(|p| p.name.clone()),
        from_code: from.map(|p| p.iso_code.clone()),
        to: to.map(|p| p.name.clone()),
        to_code: to.map(|p| p.iso_code.clone()),
        confidence: TRIP_CONFIDENCE,
        original_query: query.to_owned(),
        user_location_detected,
    }
}

/// Index of the extracted location whose alias occurs nearest after the first
/// occurrence of `marker`, skipping `exclude`.
///
/// Each alias is placed at its first occurrence in the query. Aliases starting
/// at the same offset resolve in extraction order.
fn first_after(
    matcher: &impl PhraseMatcher,
    query: &str,
    locations: &[ExtractedLocation],
    marker: &str,
    exclude: Option<usize>,
) -> Option<usize> {
    let marker_pos = matcher.find(query, marker)?;
    locations
        .iter()
        .enumerate()
        .filter(|&(i, _)| Some(i) != exclude)
        .filter_map(|(i, loc)| {
            matcher
                .find(query, &loc.alias)
                .filter(|&pos| pos > marker_pos)
                .map(|pos| (i, pos))
        })
        .min_by_key(|&(_, pos)| pos)
        .map(|(i, _)| i)
}

/// Builds a hotel result from the lowercased query.
///
/// The hotel name is whatever precedes the first `" in "`, minus a leading
/// filler phrase. Location falls back to the query itself when nothing was
/// extracted.
pub(crate) fn build_hotel_search(
    matcher: &impl PhraseMatcher,
    query: &str,
    locations: &[ExtractedLocation],
) -> HotelSearch {
    let hotel_name = matcher
        .find(query, " in ")
        .map(|idx| {
            let candidate = query[..idx].trim();
            HOTEL_NAME_FILLER_RE.replace(candidate, "").trim().to_owned()
        })
        .filter(|name| !name.is_empty());

    let first = locations.first().map(|loc| &loc.place);

    HotelSearch {
        success: true,
        hotel_name,
        location: first.map_or_else(|| query.to_owned(), |p| p.name.clone()),
        location_code: first.map(|p| p.iso_code.clone()),
        confidence: HOTEL_CONFIDENCE,
        original_query: query.to_owned(),
    }
}

/// Degraded result for a query with tied scores and no recognised place.
///
/// Uses the caller's query verbatim, without lowercasing.
pub(crate) fn unresolved_hotel_search(raw_query: &str) -> HotelSearch {
    HotelSearch {
        success: true,
        hotel_name: None,
        location: raw_query.to_owned(),
        location_code: None,
        confidence: UNRESOLVED_CONFIDENCE,
        original_query: raw_query.to_owned(),
    }
}
