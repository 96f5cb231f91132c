//! Fuzzy matching utilities
//!
//! Nearest-name suggestions for vocabulary audits and category lookups.

use strsim::normalized_levenshtein;

/// Result of a fuzzy match with the matched value and score
#[derive(Debug, Clone)]
pub struct FuzzyMatch {
    pub value: String,
    pub score: f64,
}

/// Lowercase, keep letters, digits and single spaces
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find matches in a list of candidates
///
/// Returns up to `n` matches with scores above `cutoff`, best first
pub fn find_matches<S: AsRef<str>>(
    search_term: &str,
    candidates: &[S],
    n: usize,
    cutoff: f64,
) -> Vec<FuzzyMatch> {
    let search = normalize_text(search_term);

    let mut matches: Vec<FuzzyMatch> = candidates
        .iter()
        .filter_map(|candidate| {
            let candidate = candidate.as_ref();
            let score = normalized_levenshtein(&search, &normalize_text(candidate));
            (score >= cutoff).then(|| FuzzyMatch {
                value: candidate.to_string(),
                score,
            })
        })
        .collect();

    // Stable sort keeps candidate order among ties
    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(n);
    matches
}

/// Find the best match above a minimum score
///
/// Returns None if no match meets the cutoff
pub fn find_best_match<S: AsRef<str>>(
    search_term: &str,
    candidates: &[S],
    cutoff: f64,
) -> Option<FuzzyMatch> {
    find_matches(search_term, candidates, 1, cutoff)
        .into_iter()
        .next()
}

/// Calculate similarity score between two strings
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&normalize_text(a), &normalize_text(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("Greetings 🤝"), "greetings");
        assert_eq!(normalize_text("  Newton's   Laws "), "newton s laws");
    }

    #[test]
    fn test_find_matches() {
        let candidates = ["photosynthesis", "hypothesis", "synthesis"];
        let matches = find_matches("photosynthsis", &candidates, 5, 0.6);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].value, "photosynthesis");
        assert!(matches[0].score >= 0.9);
    }

    #[test]
    fn test_find_best_match() {
        let candidates = vec!["Colors".to_string(), "Feelings".to_string()];
        let best = find_best_match("colours", &candidates, 0.6);
        assert_eq!(best.map(|m| m.value), Some("Colors".to_string()));
        assert!(find_best_match("zzzz", &candidates, 0.6).is_none());
    }

    #[test]
    fn test_similarity_ignores_case_and_symbols() {
        assert_eq!(similarity("Hello!", "hello"), 1.0);
        assert!(similarity("water", "waiter") >= 0.8);
        assert!(similarity("acid", "ocean") < 0.5);
    }
}
