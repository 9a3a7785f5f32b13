use dialdex::prelude::*;
use rand::Rng;
use std::time::Duration;

fn store_of(names: &[&str]) -> Store {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Entry {
            name: name.to_string(),
            number: format!("555-{i:04}"),
        })
        .collect()
}

fn random_name(rng: &mut impl Rng) -> String {
    let len = rng.random_range(3..12);
    (0..len).map(|_| rng.random_range('a'..='z')).collect()
}

fn random_store(rng: &mut impl Rng, count: usize) -> Store {
    (0..count)
        .map(|i| Entry {
            name: random_name(rng),
            number: format!("555-{i:04}"),
        })
        .collect()
}

fn names(store: &Store) -> Vec<String> {
    store
        .entries()
        .iter()
        .map(|entry| entry.name.clone())
        .collect()
}

fn is_sorted(store: &Store) -> bool {
    (1..store.len()).all(|i| store.name_at(i - 1) <= store.name_at(i))
}

#[test]
fn test_entry_parse() {
    let entry = Entry::parse("555-1273 Bob Jones").unwrap();
    assert_eq!(entry.number, "555-1273");
    assert_eq!(entry.name, "Bob Jones");

    // Extra interior whitespace collapses when the name is rejoined.
    let entry = Entry::parse("555-1273   Bob   Jones").unwrap();
    assert_eq!(entry.name, "Bob Jones");

    // A number-only line is a record with an empty name.
    let entry = Entry::parse("555-1273").unwrap();
    assert_eq!(entry.name, "");

    // No tokens at all is not a record.
    assert!(Entry::parse("").is_none());
    assert!(Entry::parse("   \t  ").is_none());
}

#[test]
fn test_entry_display_round_trip() {
    let entry = Entry::parse("555-1273 Bob Jones").unwrap();
    assert_eq!(entry.to_string(), "555-1273 Bob Jones");
    assert_eq!(Entry::parse(&entry.to_string()).unwrap(), entry);
}

#[test]
fn test_quicksort_fuzz_against_std_sort() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let count = rng.random_range(0..300);
        let mut store = random_store(&mut rng, count);

        let mut expected = names(&store);
        expected.sort();

        quick_sort(&mut store);
        assert_eq!(names(&store), expected);
    }
}

#[test]
fn test_quicksort_edge_cases() {
    // 1. Already sorted (adversarial for a last-element pivot)
    let mut store: Store = (0..500)
        .map(|i| Entry {
            name: format!("name{i:04}"),
            number: format!("555-{i:04}"),
        })
        .collect();
    quick_sort(&mut store);
    assert!(is_sorted(&store));

    // 2. Reversed
    let mut store: Store = (0..500)
        .rev()
        .map(|i| Entry {
            name: format!("name{i:04}"),
            number: format!("555-{i:04}"),
        })
        .collect();
    quick_sort(&mut store);
    assert!(is_sorted(&store));

    // 3. All equal names
    let mut store = store_of(&["same"; 100]);
    quick_sort(&mut store);
    assert!(is_sorted(&store));

    // 4. Empty and single
    let mut store = Store::default();
    quick_sort(&mut store);
    assert!(store.is_empty());

    let mut store = store_of(&["only"]);
    quick_sort(&mut store);
    assert_eq!(store.name_at(0), "only");
}

#[test]
fn test_bubble_sort_completes_within_generous_limit() {
    let mut rng = rand::rng();
    let mut store = random_store(&mut rng, 200);

    let limit = Duration::from_secs(3600);
    let duration = bubble_sort(&mut store, limit);

    // Finished well under the limit, so the store must be fully sorted.
    assert!(duration < limit);
    assert!(is_sorted(&store));
}

#[test]
fn test_bubble_sort_zero_limit_stops_immediately() {
    let store = store_of(&["carl", "bob", "alice", "dana"]);
    let mut sorted = store.clone();

    let duration = bubble_sort(&mut sorted, Duration::ZERO);

    // The elapsed check fires on the very first comparison, so at most one
    // adjacent swap can have landed.
    assert!(duration >= Duration::ZERO);
    let before = names(&store);
    let after = names(&sorted);
    let differing = before.iter().zip(&after).filter(|(a, b)| a != b).count();
    assert!(differing <= 2, "more than one swap applied: {after:?}");
}

#[test]
fn test_bubble_sort_keeps_partial_progress() {
    let mut rng = rand::rng();
    let original = random_store(&mut rng, 300);
    let mut store = original.clone();

    bubble_sort(&mut store, Duration::ZERO);

    // Entries are reordered at most, never added or removed.
    let mut before = names(&original);
    let mut after = names(&store);
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn test_search_agreement_on_sorted_store() {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let count = rng.random_range(0..200);
        // Distinct names, so every search answers 0 or 1.
        let mut pool: Vec<String> = (0..count).map(|i| format!("{}{i:04}", random_name(&mut rng))).collect();
        pool.sort();
        pool.dedup();

        let mut store: Store = pool
            .iter()
            .enumerate()
            .map(|(i, name)| Entry {
                name: name.clone(),
                number: format!("555-{i:04}"),
            })
            .collect();
        quick_sort(&mut store);

        for _ in 0..30 {
            let query = if !pool.is_empty() && rng.random_range(0..2) == 0 {
                pool[rng.random_range(0..pool.len())].clone()
            } else {
                format!("absent-{}", random_name(&mut rng))
            };

            let by_linear = linear_search(&store, &query);
            assert_eq!(jump_search(&store, &query), by_linear, "query {query:?}");
            assert_eq!(binary_search(&store, &query), by_linear, "query {query:?}");
        }
    }
}

#[test]
fn test_jump_search_boundaries() {
    let mut store = store_of(&["erin", "bob", "alice", "dana", "carl", "frank", "grace"]);
    quick_sort(&mut store);

    // Every present key is found, including both ends of the store.
    for entry in store.entries() {
        assert_eq!(jump_search(&store, &entry.name), 1, "key {:?}", entry.name);
    }

    // Below every key: backward scan stops at the previous block pointer.
    assert_eq!(jump_search(&store, "aaron"), 0);
    // Above every key: forward scan exits through the overshoot guard.
    assert_eq!(jump_search(&store, "zoe"), 0);
    // Absent but between present keys.
    assert_eq!(jump_search(&store, "carla"), 0);
}

#[test]
fn test_jump_search_tiny_stores() {
    let store = store_of(&["only"]);
    assert_eq!(jump_search(&store, "only"), 1);
    assert_eq!(jump_search(&store, "aaa"), 0);
    assert_eq!(jump_search(&store, "zzz"), 0);

    let store = store_of(&["alice", "bob"]);
    assert_eq!(jump_search(&store, "alice"), 1);
    assert_eq!(jump_search(&store, "bob"), 1);
    assert_eq!(jump_search(&store, "aaa"), 0);
    assert_eq!(jump_search(&store, "ben"), 0);
    assert_eq!(jump_search(&store, "zzz"), 0);
}

#[test]
fn test_empty_store_guards() {
    let store = Store::default();
    let queries = vec!["anyone".to_string(), "anyone else".to_string()];

    // Jump and binary search must short-circuit before computing any step
    // size or midpoint on a zero-length store.
    assert_eq!(jump_search(&store, "anyone"), 0);
    assert_eq!(binary_search(&store, "anyone"), 0);
    assert_eq!(linear_search(&store, "anyone"), 0);
    assert_eq!(search_all(&queries, |name| jump_search(&store, name)), 0);

    let index = KeyIndex::build(&store);
    assert!(index.is_empty());
    assert_eq!(index_lookup(&index, "anyone"), 0);
}

#[test]
fn test_index_matches_linear_on_unsorted_store() {
    let mut rng = rand::rng();

    for _ in 0..50 {
        let count = rng.random_range(0..150);
        // Suffix the position so names stay distinct while the store itself
        // stays unsorted.
        let store: Store = (0..count)
            .map(|i| Entry {
                name: format!("{}-{i}", random_name(&mut rng)),
                number: format!("555-{i:04}"),
            })
            .collect();
        let index = KeyIndex::build(&store);

        for _ in 0..20 {
            let query = if count > 0 && rng.random_range(0..2) == 0 {
                store.entries()[rng.random_range(0..count)].name.clone()
            } else {
                format!("absent-{}", random_name(&mut rng))
            };
            assert_eq!(
                index_lookup(&index, &query),
                linear_search(&store, &query),
                "query {query:?}"
            );
        }
    }
}

#[test]
fn test_search_all_sums_without_dedup() {
    let store = store_of(&["alice", "bob", "bob", "carl"]);

    // Duplicate matching entries each count under linear scan.
    assert_eq!(linear_search(&store, "bob"), 2);

    // Duplicate queries each count, and the aggregate is a plain sum.
    let queries = vec![
        "bob".to_string(),
        "bob".to_string(),
        "alice".to_string(),
        "nobody".to_string(),
    ];
    let total = search_all(&queries, |name| linear_search(&store, name));
    let by_hand: u32 = queries.iter().map(|name| linear_search(&store, name)).sum();
    assert_eq!(total, by_hand);
    assert_eq!(total, 5);

    // The total is allowed to exceed the query count.
    assert!(total as usize > queries.len());
}

#[test]
fn test_clone_isolation() {
    let original = store_of(&["carl", "alice", "bob"]);
    let mut clone = original.clone();

    quick_sort(&mut clone);

    assert_eq!(names(&original), vec!["carl", "alice", "bob"]);
    assert_eq!(names(&clone), vec!["alice", "bob", "carl"]);
}

#[test]
fn test_directory_example_scenario() {
    let store = Store::new(vec![
        Entry::parse("555-1 Alice Smith").unwrap(),
        Entry::parse("555-2 Bob Jones").unwrap(),
        Entry::parse("555-3 Carl Young").unwrap(),
    ]);
    let queries = vec!["Bob Jones".to_string(), "Dana White".to_string()];

    assert_eq!(search_all(&queries, |name| linear_search(&store, name)), 1);

    let mut sorted = store.clone();
    quick_sort(&mut sorted);
    assert_eq!(names(&sorted), vec!["Alice Smith", "Bob Jones", "Carl Young"]);
    assert_eq!(search_all(&queries, |name| binary_search(&sorted, name)), 1);
    assert_eq!(search_all(&queries, |name| jump_search(&sorted, name)), 1);

    let index = KeyIndex::build(&store);
    assert_eq!(search_all(&queries, |name| index_lookup(&index, name)), 1);
}
