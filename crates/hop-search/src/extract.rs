//! Gazetteer scan over a normalized query.

use crate::gazetteer::Gazetteer;
use crate::matcher::PhraseMatcher;
use crate::types::ExtractedLocation;

/// Returns every gazetteer alias found in `query`, in gazetteer order.
///
/// `query` is expected to be lowercased and trimmed already. Aliases that
/// resolve to the same place are all reported ("london uk" yields two
/// United Kingdom entries); role assignment relies on seeing each alias.
#[must_use]
pub fn extract_locations(
    gazetteer: &Gazetteer,
    matcher: &impl PhraseMatcher,
    query: &str,
) -> Vec<ExtractedLocation> {
    gazetteer
        .entries()
        .iter()
        .filter(|entry| matcher.contains(query, &entry.alias))
        .map(|entry| ExtractedLocation {
            alias: entry.alias.clone(),
            place: entry.place.clone(),
        })
        .collect()
}
