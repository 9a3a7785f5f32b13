//! The four lookup routines and the query-list aggregation.
//!
//! Each routine takes one query name and returns its match count. The
//! aggregate [`search_all`] sums the per-query results over a whole query
//! list without deduplicating either side: duplicate queries count every
//! time they are asked, and for [`linear_search`] duplicate matching
//! entries count every time they are hit.
//!
//! [`jump_search`] and [`binary_search`] require the store to be in
//! ascending name order. Calling them on an unsorted store yields wrong
//! counts, not an error; the orchestrator only dispatches to them once
//! sortedness is established.

use crate::store::{KeyIndex, Store};

/// Scans every entry in store order and counts those whose name equals the
/// query. Correct on any ordering. O(n) per query.
pub fn linear_search(store: &Store, name: &str) -> u32 {
    store
        .entries()
        .iter()
        .filter(|entry| entry.name == name)
        .count() as u32
}

/// Jump search over an ascending-sorted store, block size `floor(sqrt(n))`.
///
/// The block pointer advances in whole steps while the key under it is
/// below the query, then a backward scan walks from the stopping point
/// toward the previous block pointer looking for an exact match. Returns 1
/// on a match, 0 otherwise.
///
/// Boundary policy: a query above every key is rejected once the overshoot
/// is clamped to the last entry; a query below every key is rejected when
/// the backward scan reaches the previous block pointer. Neither path ever
/// touches an index outside `[0, n)`, and an empty store returns 0 before
/// any step size is computed.
pub fn jump_search(store: &Store, name: &str) -> u32 {
    let n = store.len();
    if n == 0 {
        return 0;
    }

    // n >= 1, so step >= 1 and the forward loop always advances.
    let step = (n as f64).sqrt().floor() as usize;
    let mut prev = 0;
    let mut curr = 0;

    while store.name_at(curr) < name {
        prev = curr;
        curr += step;
        if curr >= n {
            // Overshot the tail: the match, if any, sits in the last
            // partial block.
            curr = n - 1;
            if store.name_at(curr) < name {
                return 0;
            }
            break;
        }
    }

    while store.name_at(curr) > name {
        if curr == prev {
            // Reached the previous block pointer, whose key is already
            // known to compare below the query.
            return 0;
        }
        curr -= 1;
    }

    u32::from(store.name_at(curr) == name)
}

/// Classic binary search over an ascending-sorted store.
///
/// Narrows an inclusive `[low, high]` window by midpoint comparison;
/// returns 1 on an exact name match, 0 once the window is exhausted.
/// O(log n) per query.
pub fn binary_search(store: &Store, name: &str) -> u32 {
    if store.is_empty() {
        return 0;
    }

    let mut low = 0;
    let mut high = store.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        match store.name_at(mid).cmp(name) {
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => {
                if mid == 0 {
                    return 0;
                }
                high = mid - 1;
            }
            std::cmp::Ordering::Equal => return 1,
        }
    }

    0
}

/// Membership probe against a prebuilt [`KeyIndex`]. O(1) expected per
/// query; the index's O(n) construction is billed separately by the
/// orchestrator as the strategy's creation phase.
pub fn index_lookup(index: &KeyIndex, name: &str) -> u32 {
    u32::from(index.contains(name))
}

/// Runs `search` for every query independently and sums the results.
///
/// No clamping and no deduplication: the total can exceed the query-list
/// length when queries repeat or when `search` counts duplicate entries.
pub fn search_all<F>(queries: &[String], mut search: F) -> u32
where
    F: FnMut(&str) -> u32,
{
    queries.iter().map(|name| search(name)).sum()
}
