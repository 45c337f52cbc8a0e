//! Additive intent scoring over the keyword lexicons.

use crate::lexicon::Lexicon;
use crate::matcher::PhraseMatcher;

/// Weight of each lexicon phrase present in the query.
pub const KEYWORD_WEIGHT: u32 = 10;
/// Query mentions both "from" and "to".
pub const FROM_TO_BONUS: u32 = 20;
/// Query names a destination ("to ", "wanna go", ...) without hotel words.
pub const DESTINATION_BONUS: u32 = 15;
/// Query uses a movement verb ("going to", "heading to", ...).
pub const MOVEMENT_BONUS: u32 = 15;
/// Query uses an explicit lodging phrase ("hotel in", "stay at", ...).
pub const LODGING_PHRASE_BONUS: u32 = 20;
/// Query is a bare "<something> in <place>" with no travel direction.
pub const BARE_IN_BONUS: u32 = 5;

const DESTINATION_CUES: &[&str] = &["to ", "wanna go", "want to go"];
const LODGING_VETOES: &[&str] = &["hotel", "stay"];
const MOVEMENT_PHRASES: &[&str] = &["going to", "heading to", "traveling to", "travelling to"];
const LODGING_PHRASES: &[&str] = &[
    "hotel in",
    "hotels in",
    "stay in",
    "stay at",
    "accommodation in",
    "resort in",
];

/// Trip intent score for a lowercased, trimmed query.
///
/// Each lexicon phrase counts once. The destination and movement bonuses can
/// both fire on the same words ("going to rome" earns both).
#[must_use]
pub fn trip_score(lexicon: &Lexicon, matcher: &impl PhraseMatcher, query: &str) -> u32 {
    let mut score = keyword_hits(lexicon.trip_keywords(), matcher, query) * KEYWORD_WEIGHT;

    if matcher.contains(query, "from") && matcher.contains(query, "to") {
        score += FROM_TO_BONUS;
    }

    if matcher.contains_any(query, DESTINATION_CUES) && !matcher.contains_any(query, LODGING_VETOES)
    {
        score += DESTINATION_BONUS;
    }

    if matcher.contains_any(query, MOVEMENT_PHRASES) {
        score += MOVEMENT_BONUS;
    }

    score
}

/// Hotel intent score for a lowercased, trimmed query.
#[must_use]
pub fn hotel_score(lexicon: &Lexicon, matcher: &impl PhraseMatcher, query: &str) -> u32 {
    let mut score = keyword_hits(lexicon.hotel_keywords(), matcher, query) * KEYWORD_WEIGHT;

    if matcher.contains_any(query, LODGING_PHRASES) {
        score += LODGING_PHRASE_BONUS;
    }

    if matcher.contains(query, " in ")
        && !matcher.contains(query, "from")
        && !matcher.contains(query, "to")
    {
        score += BARE_IN_BONUS;
    }

    score
}

fn keyword_hits<'a>(
    keywords: impl Iterator<Item = &'a str>,
    matcher: &impl PhraseMatcher,
    query: &str,
) -> u32 {
    let hits = keywords.filter(|kw| matcher.contains(query, kw)).count();
    u32::try_from(hits).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use hop_core::MatchPolicy;

    use super::*;

    fn trip(query: &str) -> u32 {
        trip_score(&Lexicon::builtin(), &MatchPolicy::Substring, query)
    }

    fn hotel(query: &str) -> u32 {
        hotel_score(&Lexicon::builtin(), &MatchPolicy::Substring, query)
    }

    #[test]
    fn empty_query_scores_zero() {
        assert_eq!(trip(""), 0);
        assert_eq!(hotel(""), 0);
    }

    #[test]
    fn from_to_phrasing_scores_as_trip() {
        // "from" keyword + from/to bonus + "to " destination bonus
        assert_eq!(trip("from tunisia to japan"), 10 + 20 + 15);
        assert_eq!(hotel("from tunisia to japan"), 0);
    }

    #[test]
    fn going_to_earns_keyword_destination_and_movement() {
        // "going to" keyword, "to " destination cue, movement phrase
        assert_eq!(trip("going to rome"), 10 + 15 + 15);
    }

    #[test]
    fn hotel_words_veto_the_destination_bonus() {
        // "to " is present in both; only the resort query keeps the bonus.
        assert_eq!(trip("go to a hotel"), 0);
        assert_eq!(trip("go to a resort"), 15);
    }

    #[test]
    fn hotel_in_phrase_scores_as_hotel() {
        // "hotel" + "hotel in" keywords, lodging phrase, bare " in "
        assert_eq!(hotel("hotel in paris"), 10 + 10 + 20 + 5);
        assert_eq!(trip("hotel in paris"), 0);
    }

    #[test]
    fn bare_in_bonus_suppressed_by_to_substring() {
        // "tokyo" and "hilton" both contain "to", so the bare " in " bonus does not fire.
        assert_eq!(hotel("hilton in tokyo"), 0);
        assert_eq!(hotel("hilton in rome"), 0);
        assert_eq!(hotel("ritz in rome"), BARE_IN_BONUS);
    }

    #[test]
    fn substring_to_fires_inside_other_words() {
        // "toronto" satisfies the from/to bonus under substring matching.
        assert_eq!(trip("from toronto"), 10 + 20);
        assert_eq!(
            trip_score(&Lexicon::builtin(), &MatchPolicy::WordBoundary, "from toronto"),
            10
        );
    }

    #[test]
    fn each_keyword_counts_once() {
        assert_eq!(trip("visit visit visit"), 10);
    }

    #[test]
    fn custom_lexicon_is_honoured() {
        let lexicon = Lexicon::new(&["road trip"], &["b&b"]);
        assert_eq!(trip_score(&lexicon, &MatchPolicy::Substring, "road trip"), 10);
        assert_eq!(hotel_score(&lexicon, &MatchPolicy::Substring, "a b&b"), 10);
    }
}
