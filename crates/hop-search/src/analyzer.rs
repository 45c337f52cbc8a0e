use std::sync::Arc;

use hop_core::{AppConfig, MatchPolicy, PlaceRecord};

use crate::builder::{build_hotel_search, build_trip_search, unresolved_hotel_search};
use crate::error::SearchError;
use crate::extract;
use crate::gazetteer::Gazetteer;
use crate::lexicon::Lexicon;
use crate::matcher::PhraseMatcher;
use crate::scorer;
use crate::types::{AnalysisResult, ExtractedLocation, TripSearch, UserLocation};

/// Phrases in the raw query that break a one-location tie towards a trip.
const TRAVEL_HINTS: &[&str] = &["go", "visit", "travel", "wanna", "want to"];

/// Classifies free-text search queries as trip or hotel searches.
///
/// Cheap to clone: the gazetteer and lexicon are shared behind `Arc`s and
/// never mutated after construction, so one analyzer can serve every request.
#[derive(Debug, Clone)]
pub struct SmartSearchAnalyzer {
    gazetteer: Arc<Gazetteer>,
    lexicon: Arc<Lexicon>,
    policy: MatchPolicy,
}

impl SmartSearchAnalyzer {
    #[must_use]
    pub fn new(gazetteer: Gazetteer, lexicon: Lexicon, policy: MatchPolicy) -> Self {
        Self {
            gazetteer: Arc::new(gazetteer),
            lexicon: Arc::new(lexicon),
            policy,
        }
    }

    /// Built-in tables with substring matching.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Gazetteer::builtin(), Lexicon::builtin(), MatchPolicy::Substring)
    }

    /// Builds an analyzer from runtime configuration.
    ///
    /// Uses the gazetteer file when one is configured, otherwise the built-in
    /// table.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Gazetteer`] if the configured file cannot be loaded.
    pub fn from_config(config: &AppConfig) -> Result<Self, SearchError> {
        let gazetteer = match &config.gazetteer_path {
            Some(path) => {
                let gazetteer = Gazetteer::from_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    entries = gazetteer.len(),
                    "loaded gazetteer file"
                );
                gazetteer
            }
            None => Gazetteer::builtin(),
        };
        Ok(Self::new(gazetteer, Lexicon::builtin(), config.match_policy))
    }

    /// Same tables, different matching policy.
    #[must_use]
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[must_use]
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Classifies `query` and builds the matching search result.
    ///
    /// `user_location` is only consulted when a trip names a single place
    /// and no explicit "to" destination; it then fills the trip origin.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidQuery`] for an empty query. Every other
    /// input produces a result, possibly a low-confidence one.
    pub fn analyze(
        &self,
        query: &str,
        user_location: Option<&UserLocation>,
    ) -> Result<AnalysisResult, SearchError> {
        if query.is_empty() {
            return Err(SearchError::InvalidQuery);
        }

        let normalized = query.trim().to_lowercase();
        let locations = self.extract_locations(&normalized);
        let trip_score = self.trip_score(&normalized);
        let hotel_score = self.hotel_score(&normalized);

        tracing::debug!(
            query,
            trip_score,
            hotel_score,
            locations = locations.len(),
            decision = decision_label(trip_score, hotel_score),
            "smart search analysis"
        );

        let result = if trip_score > hotel_score {
            AnalysisResult::Trip(self.trip(&normalized, &locations, user_location))
        } else if hotel_score > trip_score {
            AnalysisResult::Hotel(build_hotel_search(&self.policy, &normalized, &locations))
        } else if locations.len() >= 2 {
            AnalysisResult::Trip(self.trip(&normalized, &locations, user_location))
        } else if locations.len() == 1 {
            if self.policy.contains_any(query, TRAVEL_HINTS) {
                AnalysisResult::Trip(self.trip(&normalized, &locations, user_location))
            } else {
                AnalysisResult::Hotel(build_hotel_search(&self.policy, &normalized, &locations))
            }
        } else {
            AnalysisResult::Hotel(unresolved_hotel_search(query))
        };

        Ok(result)
    }

    /// Every gazetteer alias present in an already-normalized query.
    #[must_use]
    pub fn extract_locations(&self, normalized_query: &str) -> Vec<ExtractedLocation> {
        extract::extract_locations(&self.gazetteer, &self.policy, normalized_query)
    }

    #[must_use]
    pub fn trip_score(&self, normalized_query: &str) -> u32 {
        scorer::trip_score(&self.lexicon, &self.policy, normalized_query)
    }

    #[must_use]
    pub fn hotel_score(&self, normalized_query: &str) -> u32 {
        scorer::hotel_score(&self.lexicon, &self.policy, normalized_query)
    }

    /// Supported destinations, one per ISO code, in gazetteer order.
    #[must_use]
    pub fn all_countries(&self) -> Vec<PlaceRecord> {
        self.gazetteer.unique_places()
    }

    fn trip(
        &self,
        normalized: &str,
        locations: &[ExtractedLocation],
        user_location: Option<&UserLocation>,
    ) -> TripSearch {
        build_trip_search(
            &self.gazetteer,
            &self.policy,
            normalized,
            locations,
            user_location,
        )
    }
}

impl Default for SmartSearchAnalyzer {
    fn default() -> Self {
        Self::builtin()
    }
}

fn decision_label(trip_score: u32, hotel_score: u32) -> &'static str {
    match trip_score.cmp(&hotel_score) {
        std::cmp::Ordering::Greater => "trip",
        std::cmp::Ordering::Less => "hotel",
        std::cmp::Ordering::Equal => "tie",
    }
}
