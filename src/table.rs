//! Bad-character skip tables and their construction policies
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// An opaque unit of comparison. Bytes, chars, and tokens all qualify.
pub trait Symbol: Copy + Eq + Hash {}

impl<T: Copy + Eq + Hash> Symbol for T {}

/// Which occurrence to record when a symbol repeats during forward
/// construction. Only meaningful for [`build_forward_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPolicy {
    /// Record the first time a symbol is ever seen and never update it.
    PreferFirst,
    /// Extend the recorded index through a run of identical adjacent
    /// symbols; a non-adjacent repeat does not update the entry.
    PreferLast,
}

/// Mapping from symbol to a non-negative skip offset.
///
/// Symbols absent from the source sequence are absent from the table; the
/// consumer supplies the default at the call site and floors the result at 1,
/// so the table itself never has to enforce positivity.
#[derive(Debug, Clone)]
pub struct SkipTable<S> {
    offsets: HashMap<S, usize>,
}

// Derived equality would only bound S by PartialEq, which is not enough for
// the HashMap comparison; the Symbol bound carries Eq + Hash.
impl<S: Symbol> PartialEq for SkipTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.offsets == other.offsets
    }
}

impl<S: Symbol> Eq for SkipTable<S> {}

impl<S: Symbol> SkipTable<S> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            offsets: HashMap::with_capacity(capacity),
        }
    }

    /// Looks up the offset recorded for `symbol`, if any.
    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.offsets.get(symbol).copied()
    }

    /// Number of distinct symbols in the table.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Builds the forward index: each distinct symbol maps to the index of an
/// occurrence chosen by `policy`, scanning left to right.
pub fn build_forward_index<S: Symbol>(sequence: &[S], policy: RunPolicy) -> SkipTable<S> {
    let mut table = SkipTable::with_capacity(sequence.len());
    let mut previous: Option<S> = None;

    for (i, &symbol) in sequence.iter().enumerate() {
        match table.offsets.entry(symbol) {
            Entry::Vacant(slot) => {
                slot.insert(i);
            }
            Entry::Occupied(mut slot) => {
                // An adjacent repeat extends a run; only PreferLast follows it.
                if policy == RunPolicy::PreferLast && previous == Some(symbol) {
                    slot.insert(i);
                }
            }
        }
        previous = Some(symbol);
    }

    table
}

/// Builds the backward index: each distinct symbol maps to its distance from
/// the end of the sequence (the last symbol has distance 0), keeping the
/// first value seen when scanning from the end, i.e. the last occurrence in
/// left-to-right order.
pub fn build_backward_index<S: Symbol>(sequence: &[S]) -> SkipTable<S> {
    let mut table = SkipTable::with_capacity(sequence.len());
    let len = sequence.len();

    for (i, &symbol) in sequence.iter().enumerate().rev() {
        table.offsets.entry(symbol).or_insert(len - 1 - i);
    }

    table
}
