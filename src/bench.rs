//! The benchmark orchestrator: four named strategies run strictly in
//! sequence, each timed per phase on its own clone of the pristine store.
//!
//! Strategy order matters once: the linear-scan baseline from strategy 1
//! seeds the time budget that bounds strategy 2's bubble sort. Beyond that
//! intentional dependency, no state crosses strategy boundaries.

use crate::search::{binary_search, index_lookup, jump_search, linear_search, search_all};
use crate::sort::{bubble_sort, quick_sort};
use crate::store::{KeyIndex, Store};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// The bubble-sort budget is this many times the linear-scan baseline.
pub const SORT_BUDGET_FACTOR: u32 = 10;

/// One timed phase of a strategy.
#[derive(Clone, Debug)]
pub struct PhaseTiming {
    pub label: &'static str,
    pub duration: Duration,
}

/// The outcome of one strategy: match total, query count, and per-phase
/// durations. `fell_back` marks the bubble-sort strategy's transition to
/// linear scan after a blown budget.
#[derive(Clone, Debug)]
pub struct StrategyReport {
    pub strategy: &'static str,
    pub found: u32,
    pub query_count: usize,
    pub phases: Vec<PhaseTiming>,
    pub fell_back: bool,
}

impl StrategyReport {
    /// Combined duration across all phases.
    pub fn total(&self) -> Duration {
        self.phases.iter().map(|phase| phase.duration).sum()
    }
}

/// Owns the pristine store and the shared query list, and runs the four
/// strategies against them.
///
/// ```
/// use dialdex::bench::Benchmark;
/// use dialdex::store::{Entry, Store};
///
/// let store = Store::new(vec![
///     Entry::parse("555-1 Alice Smith").unwrap(),
///     Entry::parse("555-2 Bob Jones").unwrap(),
/// ]);
/// let queries = vec!["Bob Jones".to_string(), "Dana White".to_string()];
///
/// let reports = Benchmark::new(store, queries).run();
/// assert_eq!(reports.len(), 4);
/// assert!(reports.iter().all(|report| report.found == 1));
/// ```
pub struct Benchmark {
    store: Store,
    queries: Vec<String>,
}

impl Benchmark {
    pub fn new(store: Store, queries: Vec<String>) -> Benchmark {
        Benchmark { store, queries }
    }

    /// The pristine store the strategies clone from.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Runs all four strategies in order and returns their reports.
    pub fn run(&self) -> Vec<StrategyReport> {
        let linear = self.run_linear();
        let budget = linear.total() * SORT_BUDGET_FACTOR;
        let bubble = self.run_bubble_jump(budget);
        let quick = self.run_quick_binary();
        let index = self.run_index();
        vec![linear, bubble, quick, index]
    }

    /// Strategy 1: linear scan of the unsorted store. Its duration seeds
    /// the bubble-sort budget.
    pub fn run_linear(&self) -> StrategyReport {
        info!(strategy = "linear search", "running");
        let (found, duration) =
            timed(|| search_all(&self.queries, |name| linear_search(&self.store, name)));
        self.report(
            "linear search",
            found,
            vec![phase("Searching", duration)],
            false,
        )
    }

    /// Strategy 2: bubble sort bounded by `budget`, then jump search; falls
    /// back to linear scan when the sort blows the budget and leaves the
    /// store only partially ordered.
    pub fn run_bubble_jump(&self, budget: Duration) -> StrategyReport {
        info!(strategy = "bubble sort + jump search", ?budget, "running");
        let mut store = self.store.clone();
        let sort_duration = bubble_sort(&mut store, budget);

        if sort_duration < budget {
            let (found, search_duration) =
                timed(|| search_all(&self.queries, |name| jump_search(&store, name)));
            self.report(
                "bubble sort + jump search",
                found,
                vec![
                    phase("Sorting", sort_duration),
                    phase("Searching", search_duration),
                ],
                false,
            )
        } else {
            debug!(
                ?sort_duration,
                ?budget,
                "bubble sort stopped, moving to linear search"
            );
            let (found, search_duration) =
                timed(|| search_all(&self.queries, |name| linear_search(&store, name)));
            self.report(
                "bubble sort + jump search",
                found,
                vec![
                    phase("Sorting", sort_duration),
                    phase("Searching", search_duration),
                ],
                true,
            )
        }
    }

    /// Strategy 3: quicksort to completion, then binary search. No
    /// fallback branch; the sort has no time limit.
    pub fn run_quick_binary(&self) -> StrategyReport {
        info!(strategy = "quick sort + binary search", "running");
        let mut store = self.store.clone();
        let ((), sort_duration) = timed(|| quick_sort(&mut store));
        let (found, search_duration) =
            timed(|| search_all(&self.queries, |name| binary_search(&store, name)));
        self.report(
            "quick sort + binary search",
            found,
            vec![
                phase("Sorting", sort_duration),
                phase("Searching", search_duration),
            ],
            false,
        )
    }

    /// Strategy 4: build the hash index from the unsorted store, then probe
    /// it per query. The build cost is billed as the creation phase.
    pub fn run_index(&self) -> StrategyReport {
        info!(strategy = "hash table", "running");
        let (index, build_duration) = timed(|| KeyIndex::build(&self.store));
        let (found, search_duration) =
            timed(|| search_all(&self.queries, |name| index_lookup(&index, name)));
        self.report(
            "hash table",
            found,
            vec![
                phase("Creating", build_duration),
                phase("Searching", search_duration),
            ],
            false,
        )
    }

    /// Clones the pristine store and quicksorts the clone, for callers that
    /// want to persist a sorted directory.
    pub fn quick_sorted(&self) -> Store {
        let mut store = self.store.clone();
        quick_sort(&mut store);
        store
    }

    fn report(
        &self,
        strategy: &'static str,
        found: u32,
        phases: Vec<PhaseTiming>,
        fell_back: bool,
    ) -> StrategyReport {
        StrategyReport {
            strategy,
            found,
            query_count: self.queries.len(),
            phases,
            fell_back,
        }
    }
}

fn phase(label: &'static str, duration: Duration) -> PhaseTiming {
    PhaseTiming { label, duration }
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
