//! Alignment-scanning loops for the forward and backward strategies
//!
//! Each scanner keeps a single cursor into the haystack, compares one window
//! per iteration, and advances by a skip computed from a bad-character table.
//! Two invariants hold across all of them: a full needle-length window must
//! fit before any symbol is read, and every mismatch moves the cursor by at
//! least one position. The jump helpers are factored out so the progress
//! floor can be tested directly.
use log::trace;

use crate::table::{build_backward_index, build_forward_index, RunPolicy, Symbol};

/// Front-to-back comparison against a prefer-first table built from the
/// needle. Callers have already rejected empty and oversized needles.
pub(crate) fn scan_forward_needle<S: Symbol>(needle: &[S], haystack: &[S]) -> bool {
    let table = build_forward_index(needle, RunPolicy::PreferFirst);
    let last_fit = haystack.len() - needle.len();
    let mut pos = 0;
    let mut steps = 0usize;

    while pos <= last_fit {
        steps += 1;
        debug_assert!(steps <= haystack.len());

        match first_mismatch_forward(needle, haystack, pos) {
            None => return true,
            Some(offset) => {
                let bad = haystack[pos + offset];
                let jump = forward_needle_jump(table.get(&bad), offset);
                trace!("forward-needle mismatch at {pos}+{offset}, jump {jump}");
                pos += jump;
            }
        }
    }

    false
}

/// Front-to-back comparison against a prefer-first table built from the
/// haystack. On mismatch the window snaps so the needle's mismatching symbol
/// lands on that symbol's first recorded occurrence in the haystack; a
/// needle symbol the haystack never contains ends the search.
pub(crate) fn scan_forward_haystack<S: Symbol>(needle: &[S], haystack: &[S]) -> bool {
    let table = build_forward_index(haystack, RunPolicy::PreferFirst);
    let last_fit = haystack.len() - needle.len();
    let mut pos = 0;
    let mut steps = 0usize;

    while pos <= last_fit {
        steps += 1;
        debug_assert!(steps <= haystack.len());

        match first_mismatch_forward(needle, haystack, pos) {
            None => return true,
            Some(offset) => {
                let first = table.get(&needle[offset]).unwrap_or(haystack.len());
                let next = forward_haystack_snap(pos, first, offset);
                trace!("forward-haystack mismatch at {pos}+{offset}, snap to {next}");
                pos = next;
            }
        }
    }

    false
}

/// Back-to-front comparison against a backward table built from the needle.
/// The cursor denotes the haystack index aligned with the needle's last
/// symbol and still walks left to right.
pub(crate) fn scan_backward<S: Symbol>(needle: &[S], haystack: &[S]) -> bool {
    let table = build_backward_index(needle);
    let len = needle.len();
    let mut end = len - 1;
    let mut steps = 0usize;

    while end < haystack.len() {
        steps += 1;
        debug_assert!(steps <= haystack.len());

        match first_mismatch_backward(needle, haystack, end) {
            None => return true,
            Some(offset) => {
                let bad = haystack[end - offset];
                let jump = backward_jump(table.get(&bad), offset, len);
                trace!("backward mismatch at {end}-{offset}, jump {jump}");
                end += jump;
            }
        }
    }

    false
}

/// Offset of the first mismatching pair comparing front to back, or `None`
/// on a full match of the window starting at `pos`.
fn first_mismatch_forward<S: Symbol>(needle: &[S], haystack: &[S], pos: usize) -> Option<usize> {
    (0..needle.len()).find(|&k| needle[k] != haystack[pos + k])
}

/// Back-offset of the first mismatching pair comparing tail first, or `None`
/// on a full match of the window ending at `end`. Offset 0 is the needle's
/// last symbol.
fn first_mismatch_backward<S: Symbol>(needle: &[S], haystack: &[S], end: usize) -> Option<usize> {
    let len = needle.len();
    (0..len).find(|&k| needle[len - 1 - k] != haystack[end - k])
}

/// Skip for the forward needle-table strategy.
///
/// The lookup is keyed by the haystack's mismatching symbol. When that symbol
/// has no needle occurrence before the mismatch offset, no window covering it
/// can match and the whole compared span is skipped; otherwise a
/// first-occurrence table cannot rule anything out and the window slides one.
fn forward_needle_jump(first_in_needle: Option<usize>, offset: usize) -> usize {
    match first_in_needle {
        Some(first) if first < offset => 1,
        _ => offset + 1,
    }
}

/// Next cursor for the forward haystack-table strategy: align the needle's
/// mismatching symbol with its first recorded haystack occurrence, never
/// moving less than one position.
fn forward_haystack_snap(pos: usize, first_in_haystack: usize, offset: usize) -> usize {
    (pos + 1).max(first_in_haystack.saturating_sub(offset))
}

/// Skip for the backward strategy: distance from the needle's end of the bad
/// character's last occurrence, relative to the mismatch offset, floored at
/// one so a zero lookup can never stall the cursor.
fn backward_jump(distance: Option<usize>, offset: usize, needle_len: usize) -> usize {
    distance.unwrap_or(needle_len).saturating_sub(offset).max(1)
}
