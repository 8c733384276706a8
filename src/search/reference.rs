//! Reference oracles: correct by construction, used to validate the scanners
//!
//! These are deliberately unsophisticated. The test suite and benches compare
//! every skip-table strategy against them; they are not part of the tuned
//! call surface.
use std::collections::{HashMap, HashSet};

use crate::table::Symbol;

/// Nested-loop comparison of every alignment.
pub fn naive_search<S: Symbol>(needle: &[S], haystack: &[S]) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }

    (0..=haystack.len() - needle.len())
        .any(|i| (0..needle.len()).all(|j| haystack[i + j] == needle[j]))
}

/// Set-intersection search: collect the positions of every haystack symbol,
/// then winnow the candidate set one needle symbol at a time, keeping only
/// positions whose predecessor survived the previous round.
pub fn intersection_search<S: Symbol>(needle: &[S], haystack: &[S]) -> bool {
    if needle.is_empty() {
        return true;
    }

    let mut positions: HashMap<S, HashSet<usize>> = HashMap::new();
    for (i, &symbol) in haystack.iter().enumerate() {
        positions.entry(symbol).or_default().insert(i);
    }

    let mut possible = match positions.get(&needle[0]) {
        Some(found) => found.clone(),
        None => return false,
    };

    for symbol in &needle[1..] {
        possible = match positions.get(symbol) {
            Some(found) => found
                .iter()
                .filter(|&&p| p > 0 && possible.contains(&(p - 1)))
                .copied()
                .collect(),
            None => return false,
        };
        if possible.is_empty() {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(needle: &str, haystack: &str) -> bool {
        naive_search(needle.as_bytes(), haystack.as_bytes())
    }

    fn intersection(needle: &str, haystack: &str) -> bool {
        intersection_search(needle.as_bytes(), haystack.as_bytes())
    }

    #[test]
    fn naive_matches_the_legacy_cases() {
        assert!(naive("aba", "baabac"));
        assert!(naive("cab", "xyzcab"));
        assert!(naive("a", "baabac"));
        assert!(!naive("abx", "baabac"));
        assert!(!naive("abaaaaa", "baabac"));
    }

    #[test]
    fn intersection_matches_the_legacy_cases() {
        assert!(intersection("aba", "baabac"));
        assert!(intersection("cab", "xyzcab"));
        assert!(intersection("a", "baabac"));
        assert!(!intersection("abx", "baabac"));
        assert!(!intersection("abaaaaa", "baabac"));
    }

    #[test]
    fn intersection_requires_adjacency() {
        // Every symbol present, never consecutively.
        assert!(!intersection("ab", "axbxa"));
        assert!(intersection("ab", "axab"));
    }

    #[test]
    fn oracles_share_the_empty_needle_policy() {
        assert!(naive("", ""));
        assert!(naive("", "abc"));
        assert!(intersection("", ""));
        assert!(intersection("", "abc"));
    }
}
