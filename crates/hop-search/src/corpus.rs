//! Labelled example queries and an evaluation harness over them.
//!
//! The report is diagnostic. The heuristic classifier is known to miss some
//! of these (typos that no alias covers, "to" inside unrelated words), and no
//! accuracy floor is enforced.

use crate::analyzer::SmartSearchAnalyzer;
use crate::types::{AnalysisResult, Intent};

/// What a labelled query should classify as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Trip {
        from: Option<&'static str>,
        to: Option<&'static str>,
    },
    Hotel {
        location: &'static str,
        hotel_name: Option<&'static str>,
    },
}

impl Expected {
    #[must_use]
    pub fn intent(&self) -> Intent {
        match self {
            Expected::Trip { .. } => Intent::Trip,
            Expected::Hotel { .. } => Intent::Hotel,
        }
    }

    /// Intent and canonical endpoints agree with `actual`.
    ///
    /// A hotel name is only compared when one is expected, ignoring case.
    #[must_use]
    pub fn matches(&self, actual: &AnalysisResult) -> bool {
        match (self, actual) {
            (Expected::Trip { from, to }, AnalysisResult::Trip(trip)) => {
                trip.from.as_deref() == *from && trip.to.as_deref() == *to
            }
            (
                Expected::Hotel {
                    location,
                    hotel_name,
                },
                AnalysisResult::Hotel(hotel),
            ) => {
                hotel.location == *location
                    && hotel_name.is_none_or(|name| {
                        hotel
                            .hotel_name
                            .as_deref()
                            .is_some_and(|got| got.eq_ignore_ascii_case(name))
                    })
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LabelledQuery {
    pub query: &'static str,
    pub expected: Expected,
}

const fn trip(
    query: &'static str,
    from: Option<&'static str>,
    to: Option<&'static str>,
) -> LabelledQuery {
    LabelledQuery {
        query,
        expected: Expected::Trip { from, to },
    }
}

const fn hotel(
    query: &'static str,
    location: &'static str,
    hotel_name: Option<&'static str>,
) -> LabelledQuery {
    LabelledQuery {
        query,
        expected: Expected::Hotel {
            location,
            hotel_name,
        },
    }
}

pub const CORPUS: &[LabelledQuery] = &[
    // explicit from/to
    trip("from Tunisia to Japan", Some("Tunisia"), Some("Japan")),
    trip("from Egypt to USA", Some("Egypt"), Some("United States")),
    trip("from Morocco to Spain", Some("Morocco"), Some("Spain")),
    trip("from UK to Germany", Some("United Kingdom"), Some("Germany")),
    trip("from Australia to New Zealand", Some("Australia"), Some("New Zealand")),
    trip("I would like to travel from Tunisia to Japan", Some("Tunisia"), Some("Japan")),
    trip(
        "Could you help me find flights from London to Dubai",
        Some("United Kingdom"),
        Some("United Arab Emirates"),
    ),
    // two places, no "from"
    trip("Tunisia to Japan", Some("Tunisia"), Some("Japan")),
    trip("Paris to New York", Some("France"), Some("United States")),
    trip("Berlin to Rome", Some("Germany"), Some("Italy")),
    // single destination
    trip("I wanna go to Canada", None, Some("Canada")),
    trip("I want to visit Japan", None, Some("Japan")),
    trip("wanna go Thailand", None, Some("Thailand")),
    trip("yo I wanna check out Brazil", None, Some("Brazil")),
    trip("imma go to France", None, Some("France")),
    trip("going to Austria soon", None, Some("Austria")),
    trip("I go Canada", None, Some("Canada")),
    trip("I traveling to Korea", None, Some("South Korea")),
    trip("take me to Thailand please", None, Some("Thailand")),
    trip("heading to Australia", None, Some("Australia")),
    trip("book flight to Canada", None, Some("Canada")),
    // misspellings
    trip("wanna viist Japan", None, Some("Japan")),
    trip("going to Thialand", None, Some("Thailand")),
    trip("fly to Fance", None, Some("France")),
    // hotel phrasing
    hotel("hotel in Paris", "France", None),
    hotel("hotels in Tokyo", "Japan", None),
    hotel("I would like to book a hotel in Paris", "France", None),
    hotel("I am searching for accommodation in Tokyo", "Japan", None),
    hotel("I intend to stay in Singapore", "Singapore", None),
    hotel("yo where can I stay in Tokyo", "Japan", None),
    hotel("need a place to crash in NYC", "United States", None),
    hotel("where to sleep in Barcelona", "Spain", None),
    hotel("wanna book a room in Singapore", "Singapore", None),
    hotel("I want hotel Paris", "France", None),
    hotel("staying in London", "United Kingdom", None),
    hotel("hotl in Pris", "France", None),
    // named hotels
    hotel("Grand Paradise Hotel in Paris", "France", Some("Grand Paradise Hotel")),
    hotel("Hilton in Tokyo", "Japan", Some("Hilton")),
    hotel(
        "I want to go to Grand Palace Hotel in London",
        "United Kingdom",
        Some("Grand Palace Hotel"),
    ),
    hotel("book Ritz Carlton in Paris", "France", Some("Ritz Carlton")),
    hotel("Sheraton in Barcelona", "Spain", Some("Sheraton")),
    // bare places
    hotel("Paris", "France", None),
    hotel("Dubai", "United Arab Emirates", None),
    hotel("New York", "United States", None),
];

/// A labelled query the analyzer did not reproduce exactly.
#[derive(Debug, Clone)]
pub struct Miss {
    pub query: &'static str,
    pub expected: Expected,
    pub actual: AnalysisResult,
}

impl Miss {
    /// The intent was right but an endpoint or hotel name was not.
    #[must_use]
    pub fn intent_matched(&self) -> bool {
        self.expected.intent() == self.actual.intent()
    }
}

#[derive(Debug, Clone)]
pub struct EvaluationReport {
    /// Queries that were analyzed. Rejected queries are counted separately.
    pub total: usize,
    pub intent_matches: usize,
    pub exact_matches: usize,
    pub misses: Vec<Miss>,
    /// Labelled queries the analyzer refused as invalid.
    pub rejected: Vec<&'static str>,
}

impl EvaluationReport {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn intent_accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.intent_matches as f64 / self.total as f64
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn exact_accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.exact_matches as f64 / self.total as f64
    }
}

/// Runs every labelled query through `analyzer` without a user location.
#[must_use]
pub fn evaluate(analyzer: &SmartSearchAnalyzer) -> EvaluationReport {
    evaluate_queries(analyzer, CORPUS)
}

/// Runs `queries` through `analyzer`.
///
/// Queries the analyzer rejects are listed in `rejected` and left out of
/// `total`, so `misses.len() == total - exact_matches` always holds.
#[must_use]
pub fn evaluate_queries(
    analyzer: &SmartSearchAnalyzer,
    queries: &[LabelledQuery],
) -> EvaluationReport {
    let mut report = EvaluationReport {
        total: 0,
        intent_matches: 0,
        exact_matches: 0,
        misses: Vec::new(),
        rejected: Vec::new(),
    };

    for labelled in queries {
        let Ok(actual) = analyzer.analyze(labelled.query, None) else {
            tracing::warn!(query = labelled.query, "labelled query rejected as invalid");
            report.rejected.push(labelled.query);
            continue;
        };
        report.total += 1;

        if actual.intent() == labelled.expected.intent() {
            report.intent_matches += 1;
        }

        if labelled.expected.matches(&actual) {
            report.exact_matches += 1;
        } else {
            report.misses.push(Miss {
                query: labelled.query,
                expected: labelled.expected,
                actual,
            });
        }
    }

    report
}
