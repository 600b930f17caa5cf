//! The djb2 string hash used to place keys into buckets.
//!
//! The algorithm is fixed: other implementations of the table rely on identical
//! bucket placement, so neither the seed nor the multiplier may change.

use std::{hash::Hasher, num::NonZeroUsize};

/// Initial accumulator value.
pub const SEED: u64 = 5381;

/// Hashes `bytes` with djb2 (`acc = acc * 33 + byte`), wrapping on overflow.
#[must_use]
pub fn djb2(bytes: &[u8]) -> u64 {
    bytes.iter().fold(SEED, |acc, &byte| step(acc, byte))
}

/// Folds a single byte into the accumulator.
#[inline]
fn step(acc: u64, byte: u8) -> u64 {
    acc.wrapping_shl(5).wrapping_add(acc).wrapping_add(u64::from(byte))
}

/// Returns the bucket in `[0, capacity)` that `key` belongs to.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
pub fn bucket_index(key: &str, capacity: NonZeroUsize) -> usize {
    // usize is at most 64 bits wide on supported targets, and the remainder is
    // below `capacity`, so both casts are lossless.
    (djb2(key.as_bytes()) % capacity.get() as u64) as usize
}

/// [`Hasher`] adapter over [`djb2`], for use with `BuildHasherDefault`.
///
/// Only `write` feeds the accumulator, so hashing a `str` through the `Hash`
/// trait also mixes in its `0xff` terminator byte.
#[derive(Debug, Clone, Copy)]
pub struct Djb2Hasher {
    /// Running accumulator.
    state: u64,
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self { state: SEED }
    }
}

impl Hasher for Djb2Hasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        self.state = bytes.iter().fold(self.state, |acc, &byte| step(acc, byte));
    }
}
