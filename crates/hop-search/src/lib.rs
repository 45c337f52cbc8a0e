//! Smart search intent classifier for House of Paradise.
//!
//! Decides whether a free-text query asks for a trip (from/to) or a hotel
//! (location and optional hotel name), using a static gazetteer of place
//! aliases and two weighted keyword lexicons. Everything here is synchronous
//! and side-effect free; the tables are built once and shared read-only.

pub mod analyzer;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod gazetteer;
pub mod lexicon;
pub mod matcher;
pub mod scorer;
pub mod types;

mod builder;

pub use analyzer::SmartSearchAnalyzer;
pub use corpus::{evaluate, EvaluationReport};
pub use error::SearchError;
pub use gazetteer::Gazetteer;
pub use lexicon::Lexicon;
pub use matcher::PhraseMatcher;
pub use types::{
    AnalysisResult, ErrorResult, ExtractedLocation, HotelSearch, Intent, TripSearch, UserLocation,
};
