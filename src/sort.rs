//! The two sort algorithms used as preparation phases.
//!
//! Both order a [`Store`] by entry name with plain lexicographic comparison.
//! Neither is stable; equal-name entries may end up in any relative order.
//!
//! - [`bubble_sort`] is time-boxed: it keeps whatever partial progress it
//!   made when the limit expires, and the caller decides from the returned
//!   duration whether the store may be treated as sorted.
//! - [`quick_sort`] always runs to completion.

use crate::store::Store;
use std::time::{Duration, Instant};

/// Bubble sort bounded by a wall-clock time limit.
///
/// Performs adjacent-swap passes until a full pass makes no swap, or until
/// the elapsed time exceeds `limit`. The elapsed clock is checked after
/// every comparison, not only at pass boundaries, so an expired limit is
/// noticed within one comparison's worth of work.
///
/// Returns the elapsed duration. The contract with the caller:
///
/// - returned duration `<` `limit`: the store is fully sorted;
/// - returned duration `>=` `limit`: the sort was cut off and the store must
///   be treated as unsorted (it keeps whatever partial reordering happened),
///   so ordering-dependent searches must not be used on it.
pub fn bubble_sort(store: &mut Store, limit: Duration) -> Duration {
    let start = Instant::now();
    let n = store.len();

    loop {
        let mut swapped = false;
        for i in 1..n {
            if store.name_at(i - 1) > store.name_at(i) {
                store.swap(i - 1, i);
                swapped = true;
            }
            let elapsed = start.elapsed();
            if elapsed > limit {
                return elapsed;
            }
        }
        if !swapped {
            break;
        }
    }

    start.elapsed()
}

/// In-place quicksort with Lomuto partitioning, last element as pivot.
///
/// Runs to completion with no time limit. The recursion of the textbook
/// formulation is replaced by an explicit range stack, so adversarial
/// (already sorted) input costs O(n²) time but cannot exhaust the call
/// stack.
pub fn quick_sort(store: &mut Store) {
    if store.len() < 2 {
        return;
    }

    let mut ranges = vec![(0, store.len() - 1)];
    while let Some((lo, hi)) = ranges.pop() {
        let pivot = partition(store, lo, hi);
        if pivot > lo + 1 {
            ranges.push((lo, pivot - 1));
        }
        if pivot + 1 < hi {
            ranges.push((pivot + 1, hi));
        }
    }
}

/// Partitions `store[lo..=hi]` around the name at `hi` and returns the
/// pivot's final position.
fn partition(store: &mut Store, lo: usize, hi: usize) -> usize {
    let mut slot = lo;
    for probe in lo..hi {
        if store.name_at(probe) <= store.name_at(hi) {
            store.swap(slot, probe);
            slot += 1;
        }
    }
    store.swap(slot, hi);
    slot
}
