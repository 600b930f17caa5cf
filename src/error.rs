//! Error types returned by [`ChainedHashTable`] operations.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::ChainedHashTable;

/// Errors produced by table operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A table must have at least one bucket.
    #[error("table capacity must be greater than zero")]
    InvalidCapacity,
    /// Doubling the bucket count would overflow `usize`.
    #[error("cannot grow a table of capacity {capacity} any further")]
    CapacityOverflow {
        /// Capacity of the table that was asked to grow.
        capacity: usize,
    },
    /// Memory for buckets or entries could not be obtained.
    #[error("allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),
    /// The key is not stored in the table.
    #[error("unable to find key: {key}")]
    KeyNotFound {
        /// Key that was looked up.
        key: String,
    },
}

impl TableError {
    /// Returns `true` for [`TableError::KeyNotFound`].
    #[must_use]
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}

/// A failed [`ChainedHashTable::resize`].
///
/// Resizing consumes the table, so the original is handed back here unchanged.
#[derive(Error, Debug)]
#[error("failed to resize table of capacity {}", .table.capacity())]
pub struct ResizeError {
    /// The table as it was before the attempt.
    table: ChainedHashTable,
    /// Why the new table could not be built.
    #[source]
    source: TableError,
}

impl ResizeError {
    /// Wraps the untouched `table` together with the failure.
    pub(crate) fn new(table: ChainedHashTable, source: TableError) -> Self {
        Self { table, source }
    }

    /// The underlying failure.
    #[must_use]
    pub fn error(&self) -> &TableError {
        &self.source
    }

    /// Recovers the original table.
    #[must_use]
    pub fn into_inner(self) -> ChainedHashTable {
        self.table
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            TableError::KeyNotFound { key: "key-9".to_string() }.to_string(),
            "unable to find key: key-9"
        );
        assert_eq!(TableError::InvalidCapacity.to_string(), "table capacity must be greater than zero");
        assert!(TableError::KeyNotFound { key: String::new() }.is_key_not_found());
        assert!(!TableError::InvalidCapacity.is_key_not_found());
    }

    #[test]
    fn test_resize_error_returns_table_intact() {
        let mut table = ChainedHashTable::with_capacity(4).unwrap();
        for i in 0..6 {
            table.insert(format!("key-{i}"), format!("val-{i}")).unwrap();
        }
        let expected: Vec<(String, String)> =
            table.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();

        let mut v: Vec<u64> = Vec::new();
        let cause: TableError = v.try_reserve(usize::MAX).unwrap_err().into();
        let err = ResizeError::new(table, cause.clone());

        assert_eq!(err.to_string(), "failed to resize table of capacity 4");
        assert_eq!(err.error(), &cause);
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), cause.to_string());

        let table = err.into_inner();
        assert_eq!(table.capacity(), 4);
        assert_eq!(table.len(), 6);
        let pairs: Vec<(String, String)> =
            table.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        assert_eq!(pairs, expected);
        for i in 0..6 {
            assert_eq!(table.get(&format!("key-{i}")), Some(format!("val-{i}").as_str()));
        }
    }

    #[test]
    fn test_allocation_failure_from_try_reserve() {
        let mut v: Vec<u64> = Vec::new();
        let err: TableError = v.try_reserve(usize::MAX).unwrap_err().into();
        assert!(matches!(err, TableError::AllocationFailure(_)));
    }
}
