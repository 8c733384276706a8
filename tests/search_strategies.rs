use skipscan::{horspool_search_str, search_str, Strategy};

#[test]
fn all_strategies_find_known_substrings() {
    for strategy in Strategy::ALL {
        assert!(search_str("aba", "baabac", strategy), "{strategy}");
        assert!(search_str("cab", "xyzcab", strategy), "{strategy}");
        assert!(search_str("a", "baabac", strategy), "{strategy}");
    }
}

#[test]
fn all_strategies_reject_absent_substrings() {
    for strategy in Strategy::ALL {
        assert!(!search_str("abx", "baabac", strategy), "{strategy}");
    }
}

#[test]
fn needle_longer_than_haystack_is_false_for_every_strategy() {
    for strategy in Strategy::ALL {
        assert!(!search_str("abaaaaa", "baabac", strategy), "{strategy}");
    }
}

#[test]
fn long_skips_reach_a_match_at_the_far_end() {
    let haystack = format!("{}cab", "xyz".repeat(100));
    for strategy in Strategy::ALL {
        assert!(search_str("cab", &haystack, strategy), "{strategy}");
    }
}

#[test]
fn matches_at_the_very_start_and_end() {
    for strategy in Strategy::ALL {
        assert!(search_str("baa", "baabac", strategy), "{strategy}");
        assert!(search_str("bac", "baabac", strategy), "{strategy}");
        assert!(search_str("baabac", "baabac", strategy), "{strategy}");
    }
}

#[test]
fn horspool_handles_partial_match_tails() {
    assert!(horspool_search_str("apple", "xxxxaapple"));
    assert!(horspool_search_str("cdc", "bcdcba"));
}

#[test]
fn horspool_handles_runs() {
    assert!(horspool_search_str("ccc", "bcccba"));
}

#[test]
fn repeated_partial_matches_do_not_derail_any_strategy() {
    // Many far-apart "app" fragments, with and without surrounding 'a' runs.
    let fragments_then_match = format!("{}apple", "xxxxxxxxxxapp".repeat(10));
    let fragments_in_runs = "aaaaaaaaaaapp".repeat(10);
    for strategy in Strategy::ALL {
        assert!(search_str("apple", &fragments_then_match, strategy), "{strategy}");
        assert!(!search_str("apple", &fragments_in_runs, strategy), "{strategy}");
    }
}
