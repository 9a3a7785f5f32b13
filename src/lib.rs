//! # Dialdex
//!
//! `dialdex` benchmarks four strategies for matching a list of query names
//! against a large contact directory, timing each strategy's preparation
//! (sort or index build) and search phases separately.
//!
//! ## Strategies
//!
//! - **Linear search**: scan the unsorted directory per query. Its duration
//!   seeds the time budget for the next strategy.
//! - **Bubble sort + jump search**: time-boxed bubble sort (budget = 10×
//!   the linear baseline), then jump search; if the sort blows the budget
//!   the strategy falls back to linear scan over the partially reordered
//!   directory.
//! - **Quick sort + binary search**: unbounded quicksort, then binary
//!   search.
//! - **Hash table**: build a name index once, then O(1) membership probes.
//!
//! Every strategy runs on its own clone of the pristine directory, so the
//! destructive sorts never leak state into later strategies.
//!
//! ## Usage
//!
//! ```rust
//! use dialdex::prelude::*;
//!
//! let store = Store::new(vec![
//!     Entry::parse("555-1 Alice Smith").unwrap(),
//!     Entry::parse("555-2 Bob Jones").unwrap(),
//!     Entry::parse("555-3 Carl Young").unwrap(),
//! ]);
//! let queries = vec!["Bob Jones".to_string(), "Dana White".to_string()];
//!
//! let reports = Benchmark::new(store, queries).run();
//!
//! assert_eq!(reports.len(), 4);
//! // "Bob Jones" matches, "Dana White" does not, under every strategy.
//! assert!(reports.iter().all(|report| report.found == 1));
//! ```
//!
//! The algorithms are also usable directly:
//!
//! ```rust
//! use dialdex::search::binary_search;
//! use dialdex::sort::quick_sort;
//! use dialdex::store::{Entry, Store};
//!
//! let mut store = Store::new(vec![
//!     Entry::parse("555-2 Bob Jones").unwrap(),
//!     Entry::parse("555-1 Alice Smith").unwrap(),
//! ]);
//! quick_sort(&mut store);
//!
//! assert_eq!(store.name_at(0), "Alice Smith");
//! assert_eq!(binary_search(&store, "Bob Jones"), 1);
//! ```
//!
//! File loading ([`io`]) and report rendering ([`report`]) are thin
//! wrappers kept outside the core: the benchmark itself only ever sees an
//! in-memory [`store::Store`] and a query list, and only ever produces raw
//! durations.

pub mod bench;
pub mod error;
pub mod io;
pub mod report;
pub mod search;
pub mod sort;
pub mod store;

pub use bench::{Benchmark, StrategyReport};
pub use error::{Error, Result};
pub use store::{Entry, KeyIndex, Store};

pub mod prelude {
    pub use crate::bench::{Benchmark, PhaseTiming, StrategyReport};
    pub use crate::error::{Error, Result};
    pub use crate::search::{binary_search, index_lookup, jump_search, linear_search, search_all};
    pub use crate::sort::{bubble_sort, quick_sort};
    pub use crate::store::{Entry, KeyIndex, Store};
}
