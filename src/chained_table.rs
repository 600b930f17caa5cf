use std::{iter::Flatten, mem, num::NonZeroUsize, slice};

use log::{debug, trace, warn};

use crate::{
    djb2::bucket_index,
    error::{ResizeError, TableError},
};

/// A key-value pair stored in a chain
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    /// The key, unique within its chain
    key: String,
    /// The value associated with the key
    value: String,
}

/// Entries sharing one bucket, ordered from head to tail by insertion
type Chain = Vec<Entry>;

/// Outcome of a successful [`ChainedHashTable::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    /// The key was new and a fresh entry was appended to its chain.
    Inserted,
    /// The key already existed; its value was replaced.
    Overwritten {
        /// The value held before the insert.
        previous: String,
    },
}

/// A string-to-string hash table with a fixed bucket count and separate chaining.
///
/// Keys are placed with [`djb2`](crate::djb2::djb2) reduced modulo the capacity. Keys that
/// land in the same bucket form a chain; new keys go to the tail of the chain. The table
/// never grows on its own: call [`resize`](Self::resize) to double the bucket count.
///
/// Note: This implementation is not thread-safe. Guard the whole table with a single lock
/// if it has to be shared.
#[derive(Debug, Clone)]
pub struct ChainedHashTable {
    /// One chain per bucket; `buckets.len() == capacity`
    buckets: Vec<Chain>,
    /// Number of buckets
    capacity: NonZeroUsize,
    /// Total number of entries across all chains
    len: usize,
}

impl ChainedHashTable {
    /// Creates a table with `capacity` empty buckets.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidCapacity`] if `capacity` is zero, and
    /// [`TableError::AllocationFailure`] if the bucket array cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(TableError::InvalidCapacity)?;

        let mut buckets = Vec::new();
        buckets.try_reserve_exact(capacity.get())?;
        buckets.resize_with(capacity.get(), Vec::new);

        debug!("created table with {capacity} buckets");
        Ok(Self { buckets, capacity, len: 0 })
    }

    /// Gets the bucket index for a key
    fn index_of(&self, key: &str) -> usize {
        bucket_index(key, self.capacity)
    }

    /// The chain stored in bucket `index`
    #[allow(clippy::indexing_slicing)]
    fn chain(&self, index: usize) -> &Chain {
        // Indices come from `index_of`, which is always below `buckets.len()`.
        &self.buckets[index]
    }

    /// The chain stored in bucket `index`, mutably
    #[allow(clippy::indexing_slicing)]
    fn chain_mut(&mut self, index: usize) -> &mut Chain {
        &mut self.buckets[index]
    }

    /// Inserts a key-value pair.
    ///
    /// If the key is already present its value is replaced in place and the old value is
    /// returned in [`Insertion::Overwritten`]. Otherwise a new entry is appended at the
    /// tail of the key's chain. No other entry is touched.
    ///
    /// # Errors
    ///
    /// [`TableError::AllocationFailure`] if the chain cannot grow; the table is left as it
    /// was.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Insertion, TableError> {
        let key = key.into();
        let value = value.into();
        let index = self.index_of(&key);
        let chain = self.chain_mut(index);

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            let previous = mem::replace(&mut entry.value, value);
            debug!("overwrote value of {key:?} in bucket {index}");
            return Ok(Insertion::Overwritten { previous });
        }

        chain.try_reserve(1)?;
        trace!("appending {key:?} to bucket {index} at position {}", chain.len());
        chain.push(Entry { key, value });
        self.len = self.len.saturating_add(1);

        Ok(Insertion::Inserted)
    }

    /// Retrieves the value stored for `key`.
    ///
    /// An empty bucket and a chain without the key both yield `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let index = self.index_of(key);
        let found = self.chain(index).iter().find(|entry| entry.key == key);

        if found.is_none() {
            debug!("unable to find key {key:?} in bucket {index}");
        }
        found.map(|entry| entry.value.as_str())
    }

    /// Get a mutable reference to the value stored for `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        let index = self.index_of(key);
        self.chain_mut(index)
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns true if the table contains `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        let index = self.index_of(key);
        self.chain(index).iter().any(|entry| entry.key == key)
    }

    /// Removes `key` and returns the value it held.
    ///
    /// The remaining entries of the chain keep their order whether the removed entry was
    /// the head, an interior node or the tail. A bucket whose last entry is removed gives
    /// its storage back.
    ///
    /// # Errors
    ///
    /// [`TableError::KeyNotFound`] if the key is absent; the table is not modified.
    pub fn remove(&mut self, key: &str) -> Result<String, TableError> {
        let index = self.index_of(key);
        let chain = self.chain_mut(index);

        let Some(position) = chain.iter().position(|entry| entry.key == key) else {
            warn!("unable to find key {key:?} in bucket {index}");
            return Err(TableError::KeyNotFound { key: key.to_owned() });
        };

        let removed = chain.remove(position);
        if chain.is_empty() {
            chain.shrink_to_fit();
        }
        self.len = self.len.saturating_sub(1);
        trace!("removed {key:?} from bucket {index} at position {position}");

        Ok(removed.value)
    }

    /// Doubles the bucket count, rehashing every entry.
    ///
    /// The table is consumed. Every entry is re-inserted into a fresh table of twice the
    /// capacity through [`insert`](Self::insert), so each key is placed by its hash against
    /// the new capacity. The old table is dropped once the copy is complete.
    ///
    /// # Errors
    ///
    /// If doubling overflows or memory runs out, the original table is returned untouched
    /// inside [`ResizeError`].
    pub fn resize(self) -> Result<Self, ResizeError> {
        match self.rehashed() {
            Ok(table) => {
                debug!("resized table from {} to {} buckets", self.capacity, table.capacity);
                Ok(table)
            }
            Err(err) => {
                warn!("resize of {}-bucket table failed: {err}", self.capacity);
                Err(ResizeError::new(self, err))
            }
        }
    }

    /// Builds a copy of this table with twice as many buckets
    fn rehashed(&self) -> Result<Self, TableError> {
        // Unreachable in practice: the bucket array would exhaust memory long before this.
        let capacity = self
            .capacity
            .get()
            .checked_mul(2)
            .ok_or(TableError::CapacityOverflow { capacity: self.capacity.get() })?;

        let mut table = Self::with_capacity(capacity)?;
        for entry in self.buckets.iter().flatten() {
            table.insert(entry.key.as_str(), entry.value.as_str())?;
        }

        Ok(table)
    }

    /// Removes every entry, keeping the bucket count
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            *chain = Vec::new();
        }
        self.len = 0;
    }

    /// Returns the number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns the ratio of entries to buckets
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity.get() as f64
    }

    /// Returns the length of the chain in `bucket`, or `None` if the bucket is out of range
    #[must_use]
    pub fn chain_len(&self, bucket: usize) -> Option<usize> {
        self.buckets.get(bucket).map(Vec::len)
    }

    /// Returns the chain length of every bucket, in bucket order
    pub fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(Vec::len)
    }

    /// Returns an iterator over the key-value pairs.
    ///
    /// Pairs come out bucket by bucket, each chain from head to tail. That order depends
    /// on the capacity and is not part of the table's contract.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter { entries: self.buckets.iter().flatten() }
    }
}

/// Iterator over the key-value pairs of a [`ChainedHashTable`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// All chains, flattened
    entries: Flatten<slice::Iter<'a, Chain>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| (entry.key.as_str(), entry.value.as_str()))
    }
}

impl<'a> IntoIterator for &'a ChainedHashTable {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
