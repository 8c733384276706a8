//! Search strategies over bad-character skip tables
pub mod horspool;
pub mod reference;
pub mod scanner;

use std::fmt;
use std::str::FromStr;

use crate::error::SkipscanError;
use crate::table::Symbol;

pub use horspool::horspool_search;

/// Which table feeds the scanner and which end of the window drives
/// comparisons. Selected once per call; the scan loops never re-test the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Front-to-back comparison, table built from the haystack.
    ForwardHaystack,
    /// Front-to-back comparison, table built from the needle.
    ForwardNeedle,
    /// Back-to-front comparison, table built from the needle.
    BackwardNeedle,
    /// Whole-window comparison keyed by the window's last symbol.
    Horspool,
}

impl Strategy {
    /// All strategies, in a fixed order. Handy for tests and benches that
    /// assert every variant agrees.
    pub const ALL: [Strategy; 4] = [
        Strategy::ForwardHaystack,
        Strategy::ForwardNeedle,
        Strategy::BackwardNeedle,
        Strategy::Horspool,
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::ForwardHaystack => write!(f, "forward-haystack"),
            Strategy::ForwardNeedle => write!(f, "forward-needle"),
            Strategy::BackwardNeedle => write!(f, "backward-needle"),
            Strategy::Horspool => write!(f, "horspool"),
        }
    }
}

impl FromStr for Strategy {
    type Err = SkipscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward-haystack" => Ok(Strategy::ForwardHaystack),
            "forward-needle" => Ok(Strategy::ForwardNeedle),
            "backward-needle" => Ok(Strategy::BackwardNeedle),
            "horspool" => Ok(Strategy::Horspool),
            other => Err(SkipscanError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Decides whether `needle` occurs as a contiguous run inside `haystack`.
///
/// An empty needle is always found (vacuous match); a needle longer than the
/// haystack is rejected before any table is built. All strategies return the
/// same answer and differ only in how far each mismatch lets them skip.
pub fn search<S: Symbol>(needle: &[S], haystack: &[S], strategy: Strategy) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }

    match strategy {
        Strategy::ForwardHaystack => scanner::scan_forward_haystack(needle, haystack),
        Strategy::ForwardNeedle => scanner::scan_forward_needle(needle, haystack),
        Strategy::BackwardNeedle => scanner::scan_backward(needle, haystack),
        Strategy::Horspool => horspool::horspool_search(needle, haystack),
    }
}

/// Convenience wrapper over [`search`] for string data, comparing bytes.
pub fn search_str(needle: &str, haystack: &str, strategy: Strategy) -> bool {
    search(needle.as_bytes(), haystack.as_bytes(), strategy)
}
