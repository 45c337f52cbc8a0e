//! Keyword lexicons for trip and hotel intent.

/// Phrases that signal the user wants to go somewhere.
///
/// Includes slang and common misspellings seen in real queries.
pub const STRONG_TRIP_KEYWORDS: &[&str] = &[
    "from",
    "fly",
    "flight",
    "plane",
    "ticket",
    "travel to",
    "going to",
    "visit",
    "trip to",
    "wanna go",
    "want to go",
    "heading to",
    "gonna go",
    "imma go",
    "taking a trip",
    "catching a flight",
    "book flight",
    "plane tickets",
    "find flights",
    "search trips",
    "get me a ticket",
    "check out",
    "imma check",
    "gonna check",
    "viist",
    "vist",
    "visitt",
    "travling",
    "trvl",
    "trvel",
    "go visit",
    "lemme go",
    "tryna go",
    "tryna visit",
    "gotta go",
    "need to go",
    "want go",
    "wanna viist",
];

/// Phrases that signal the user wants somewhere to sleep.
pub const STRONG_HOTEL_KEYWORDS: &[&str] = &[
    "hotel",
    "stay",
    "accommodation",
    "resort",
    "lodge",
    "inn",
    "room",
    "book room",
    "hotel in",
    "stay in",
    "stay at",
    "hotels in",
    "where to stay",
    "place to stay",
    "need a place",
    "somewhere to stay",
    "crash in",
    "sleep in",
    "lodging",
    "reserve",
    "book a hotel",
];

/// The two keyword lists the scorer sums over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    trip_keywords: Vec<String>,
    hotel_keywords: Vec<String>,
}

impl Lexicon {
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(STRONG_TRIP_KEYWORDS, STRONG_HOTEL_KEYWORDS)
    }

    #[must_use]
    pub fn new(trip_keywords: &[&str], hotel_keywords: &[&str]) -> Self {
        Self {
            trip_keywords: lowercased(trip_keywords),
            hotel_keywords: lowercased(hotel_keywords),
        }
    }

    pub fn trip_keywords(&self) -> impl Iterator<Item = &str> {
        self.trip_keywords.iter().map(String::as_str)
    }

    pub fn hotel_keywords(&self) -> impl Iterator<Item = &str> {
        self.hotel_keywords.iter().map(String::as_str)
    }
}

fn lowercased(list: &[&str]) -> Vec<String> {
    list.iter().map(|kw| kw.to_lowercase()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lexicons_are_lowercase() {
        let lexicon = Lexicon::builtin();
        for kw in lexicon.trip_keywords().chain(lexicon.hotel_keywords()) {
            assert_eq!(kw, kw.to_lowercase());
        }
    }

    #[test]
    fn new_lowercases_custom_keywords() {
        let lexicon = Lexicon::new(&["Road Trip"], &["B&B"]);
        assert_eq!(lexicon.trip_keywords().collect::<Vec<_>>(), ["road trip"]);
        assert_eq!(lexicon.hotel_keywords().collect::<Vec<_>>(), ["b&b"]);
    }
}
