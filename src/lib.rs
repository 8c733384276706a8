//! Boolean substring search built on bad-character skip tables.
//!
//! Given a needle and a haystack, [`search`] answers whether the needle
//! occurs as a contiguous run inside the haystack. Four interchangeable
//! [`Strategy`] variants honor the same contract: two front-to-back scanners
//! (table built from the haystack or from the needle), a back-to-front
//! scanner, and the Horspool single-table engine. Tables are built fresh per
//! call; callers searching the same needle repeatedly can build and reuse
//! their own via [`build_forward_index`] / [`build_backward_index`].
//!
//! The contract is found / not found only: no positions, no spans.
pub mod cli;
pub mod error;
pub mod search;
pub mod table;

pub use error::{Result, SkipscanError};
pub use search::{horspool_search, search, search_str, Strategy};
pub use search::horspool::horspool_search_str;
pub use search::reference::{intersection_search, naive_search};
pub use table::{build_backward_index, build_forward_index, RunPolicy, SkipTable, Symbol};
