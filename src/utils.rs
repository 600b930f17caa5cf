//! Utility functions and traits for `ChainedHashTable`

use crate::{ChainedHashTable, TableError};

/// Extension trait for tables that provides additional utility methods
pub trait TableExtensions {
    /// Returns the keys of the table as a Vec
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the table as a Vec
    fn values(&self) -> Vec<String>;

    /// Returns the length of the longest chain
    fn longest_chain(&self) -> usize;
}

impl TableExtensions for ChainedHashTable {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    fn values(&self) -> Vec<String> {
        self.iter().map(|(_, v)| v.to_owned()).collect()
    }

    fn longest_chain(&self) -> usize {
        self.chain_lengths().max().unwrap_or(0)
    }
}

/// Creates a `ChainedHashTable` with `capacity` buckets from an iterator of key-value pairs.
///
/// Later pairs overwrite earlier ones with the same key.
///
/// # Errors
///
/// Propagates any error from [`ChainedHashTable::with_capacity`] or
/// [`ChainedHashTable::insert`].
pub fn from_pairs<K, V, I>(capacity: usize, iter: I) -> Result<ChainedHashTable, TableError>
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut table = ChainedHashTable::with_capacity(capacity)?;

    for (key, value) in iter {
        table.insert(key, value)?;
    }

    Ok(table)
}

/// Snapshot of how entries are spread across the buckets of a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainStats {
    /// Number of buckets
    pub capacity: usize,
    /// Number of entries
    pub entries: usize,
    /// Buckets holding no entry
    pub empty_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Mean chain length over the non-empty buckets
    pub average_chain: f64,
}

impl ChainStats {
    /// Collects statistics for `table`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of(table: &ChainedHashTable) -> Self {
        let empty_buckets = table.chain_lengths().filter(|&len| len == 0).count();
        let occupied = table.capacity().saturating_sub(empty_buckets);
        let average_chain =
            if occupied == 0 { 0.0 } else { table.len() as f64 / occupied as f64 };

        Self {
            capacity: table.capacity(),
            entries: table.len(),
            empty_buckets,
            longest_chain: table.longest_chain(),
            average_chain,
        }
    }
}
