//! Phrase matching strategies used by extraction, scoring and role assignment.

use hop_core::MatchPolicy;

/// Finds phrase occurrences inside an already-normalized query.
///
/// Every phrase test in the classifier goes through this trait, so switching
/// between raw substring matching and word-boundary matching is a matter of
/// handing the analyzer a different policy.
pub trait PhraseMatcher {
    /// Byte offset of the first accepted occurrence of `needle`.
    fn find(&self, haystack: &str, needle: &str) -> Option<usize>;

    fn contains(&self, haystack: &str, needle: &str) -> bool {
        self.find(haystack, needle).is_some()
    }

    fn contains_any(&self, haystack: &str, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.contains(haystack, needle))
    }
}

impl PhraseMatcher for MatchPolicy {
    fn find(&self, haystack: &str, needle: &str) -> Option<usize> {
        match self {
            MatchPolicy::Substring => haystack.find(needle),
            MatchPolicy::WordBoundary => haystack
                .match_indices(needle)
                .map(|(idx, _)| idx)
                .find(|&idx| on_word_boundary(haystack, needle, idx)),
        }
    }
}

/// Edges of `needle` that are themselves word characters must not touch
/// another word character in `haystack`. Edges that are spaces or punctuation
/// already delimit the phrase and are not checked.
fn on_word_boundary(haystack: &str, needle: &str, idx: usize) -> bool {
    let is_word = |c: char| c.is_alphanumeric();

    let starts_with_word = needle.chars().next().is_some_and(is_word);
    let ends_with_word = needle.chars().next_back().is_some_and(is_word);

    let before_ok = !starts_with_word || !haystack[..idx].chars().next_back().is_some_and(is_word);
    let after_ok =
        !ends_with_word || !haystack[idx + needle.len()..].chars().next().is_some_and(is_word);

    before_ok && after_ok
}
