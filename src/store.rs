//! Directory records and the containers the strategies operate on.
//!
//! This module defines:
//! - [`Entry`]: one directory record, a (name, number) pair.
//! - [`Store`]: the ordered, reorderable sequence of entries under benchmark.
//! - [`KeyIndex`]: a hash index over entry names for O(1) membership queries.

use std::collections::HashMap;
use std::fmt;

/// One directory record.
///
/// The `name` is the lookup key (a person's name, possibly multiple words)
/// and the `number` is the associated value (a phone number). On disk a
/// record is a single line with the number first:
///
/// ```
/// use dialdex::store::Entry;
///
/// let entry = Entry::parse("555-1273 Bob Jones").unwrap();
/// assert_eq!(entry.name, "Bob Jones");
/// assert_eq!(entry.number, "555-1273");
/// assert_eq!(entry.to_string(), "555-1273 Bob Jones");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub number: String,
}

impl Entry {
    /// Parses a directory line: the first whitespace-delimited token is the
    /// number, the remainder (rejoined with single spaces) is the name.
    ///
    /// Returns `None` when the line yields no tokens at all. A record with
    /// an empty name (number only) is accepted.
    pub fn parse(line: &str) -> Option<Entry> {
        let mut tokens = line.split_whitespace();
        let number = tokens.next()?.to_string();
        let name = tokens.collect::<Vec<_>>().join(" ");
        Some(Entry { name, number })
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.name)
    }
}

/// The ordered sequence of entries a strategy searches.
///
/// A store never grows or shrinks after construction; the sort algorithms
/// only reorder it through [`Store::swap`]. Strategies that sort must work
/// on their own [`Clone`], so the pristine load order survives for the next
/// strategy.
#[derive(Clone, Debug, Default)]
pub struct Store {
    entries: Vec<Entry>,
}

impl Store {
    /// Wraps a loaded entry list.
    pub fn new(entries: Vec<Entry>) -> Store {
        Store { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in their current order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The lookup key at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. An out-of-range position is a programming
    /// error in the caller's index arithmetic, not a recoverable condition.
    pub fn name_at(&self, index: usize) -> &str {
        &self.entries[index].name
    }

    /// Exchanges the entries at positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of range.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
    }
}

impl FromIterator<Entry> for Store {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Store {
        Store::new(iter.into_iter().collect())
    }
}

/// A name → number hash index built from a store snapshot.
///
/// Construction is O(n) over the store; lookups are O(1) expected. The index
/// is read-only after [`KeyIndex::build`] and does not observe later
/// reordering of the store it was built from (reordering cannot change
/// membership anyway).
///
/// ```
/// use dialdex::store::{Entry, KeyIndex, Store};
///
/// let store = Store::new(vec![Entry::parse("555-1 Alice Smith").unwrap()]);
/// let index = KeyIndex::build(&store);
/// assert!(index.contains("Alice Smith"));
/// assert!(!index.contains("Bob Jones"));
/// ```
#[derive(Debug)]
pub struct KeyIndex {
    map: HashMap<String, String>,
}

impl KeyIndex {
    /// Builds the index from the store's current entries.
    ///
    /// Duplicate names collapse to a single slot; membership queries are
    /// unaffected.
    pub fn build(store: &Store) -> KeyIndex {
        let map = store
            .entries()
            .iter()
            .map(|entry| (entry.name.clone(), entry.number.clone()))
            .collect();
        KeyIndex { map }
    }

    /// Returns `true` if any entry carried this name at build time.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of distinct names in the index.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the index was built from an empty store.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
