//! File collaborators: record loading, query loading, and the optional
//! sorted-directory writer.
//!
//! These wrap the core in plain line-oriented file I/O. The core itself
//! never opens files; callers hand it a loaded [`Store`] and query list.

use crate::error::{Error, Result};
use crate::store::{Entry, Store};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Loads directory records, one entry per non-empty line.
///
/// A whitespace-only line cannot yield a record and aborts the load with
/// [`Error::MalformedRecord`] carrying its 1-based line number. Blank lines
/// are skipped.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let text = read_text(path)?;
    let mut entries = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let entry = Entry::parse(line).ok_or(Error::MalformedRecord { line: idx + 1 })?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Loads query names, one per line, with no parsing beyond the line split.
pub fn load_queries(path: &Path) -> Result<Vec<String>> {
    let text = read_text(path)?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Writes the store's entries back out in their current order, one
/// `"{number} {name}"` line each.
///
/// This is an opt-in side action for inspecting a sorted directory; nothing
/// in the benchmark reads the file back.
pub fn save_entries(path: &Path, store: &Store) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    for entry in store.entries() {
        writeln!(writer, "{entry}").map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }
    writer.flush().map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
