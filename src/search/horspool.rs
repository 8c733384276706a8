//! The Horspool simplification: one backward table, whole-window compares
use log::trace;

use crate::table::{build_backward_index, Symbol};

/// Decides whether `needle` occurs inside `haystack` using a single backward
/// table built over the needle without its last symbol.
///
/// The mismatch driver is always the last symbol of the current window, never
/// the position of the actual mismatch: less precise skips than the general
/// backward scanner, in exchange for one table and a block compare. An empty
/// needle is always found.
pub fn horspool_search<S: Symbol>(needle: &[S], haystack: &[S]) -> bool {
    if needle.is_empty() {
        return true;
    }

    let len = needle.len();
    // At most len - 1 entries: the last symbol must not shadow the distance
    // of its earlier occurrences.
    let table = build_backward_index(&needle[..len - 1]);
    let mut pos = 0;
    let mut steps = 0usize;

    while pos + len <= haystack.len() {
        steps += 1;
        debug_assert!(steps <= haystack.len());

        if &haystack[pos..pos + len] == needle {
            return true;
        }

        let last = haystack[pos + len - 1];
        let jump = table.get(&last).unwrap_or(len).max(1);
        trace!("horspool window at {pos}, jump {jump}");
        pos += jump;
    }

    false
}

/// Byte-wise convenience wrapper over [`horspool_search`].
pub fn horspool_search_str(needle: &str, haystack: &str) -> bool {
    horspool_search(needle.as_bytes(), haystack.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_plain_matches() {
        assert!(horspool_search_str("aba", "baabac"));
        assert!(horspool_search_str("cab", "xyzcab"));
        assert!(horspool_search_str("a", "baabac"));
    }

    #[test]
    fn rejects_absent_patterns() {
        assert!(!horspool_search_str("abx", "baabac"));
        assert!(!horspool_search_str("abaaaaa", "baabac"));
    }

    #[test]
    fn partial_matches_do_not_confuse_the_skip() {
        assert!(horspool_search_str("apple", "xxxxaapple"));
        assert!(horspool_search_str("cdc", "bcdcba"));
    }

    #[test]
    fn runs_in_the_needle_still_make_progress() {
        // Every window symbol is in the table with small distances; the
        // floor keeps the cursor moving.
        assert!(horspool_search_str("ccc", "bcccba"));
        assert!(!horspool_search_str("ccc", "bccbcc"));
    }

    #[test]
    fn empty_needle_is_vacuously_found() {
        assert!(horspool_search_str("", ""));
        assert!(horspool_search_str("", "abc"));
    }

    #[test]
    fn single_symbol_needle_has_an_empty_table() {
        // Table over needle[..0]; every mismatch takes the full-length
        // default of 1.
        assert!(horspool_search_str("c", "abca"));
        assert!(!horspool_search_str("z", "abca"));
    }
}
