//! # Chaintable
//!
//! A string-to-string hash table with a fixed number of buckets and separate chaining.
//!
//! - Keys are placed with the [`djb2`](djb2::djb2) hash reduced modulo the bucket count.
//!   The hash is fixed so bucket placement matches other implementations bit for bit.
//! - Keys that share a bucket form a chain; new keys are appended at the tail.
//! - The table never grows on its own. [`ChainedHashTable::resize`] consumes the table and
//!   returns one with twice as many buckets, rehashing every entry.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chaintable::{ChainedHashTable, Insertion, TableError};
//!
//! let mut table = ChainedHashTable::with_capacity(8)?;
//!
//! // Insert values
//! table.insert("apple", "red")?;
//! table.insert("banana", "yellow")?;
//!
//! // Retrieve values
//! assert_eq!(table.get("apple"), Some("red"));
//!
//! // Update values
//! let outcome = table.insert("apple", "green")?;
//! assert_eq!(outcome, Insertion::Overwritten { previous: "red".to_string() });
//!
//! // Remove values
//! assert_eq!(table.remove("apple")?, "green");
//! assert!(matches!(table.remove("apple"), Err(TableError::KeyNotFound { .. })));
//!
//! // Grow
//! let table = table.resize()?;
//! assert_eq!(table.capacity(), 16);
//! assert_eq!(table.get("banana"), Some("yellow"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Sharing
//!
//! The table does no locking of its own. To share it between threads put the whole table
//! behind one lock:
//!
//! ```rust
//! use chaintable::ChainedHashTable;
//! use std::sync::{Arc, Mutex};
//! use std::thread;
//!
//! let table = Arc::new(Mutex::new(ChainedHashTable::with_capacity(64)?));
//!
//! let handles: Vec<_> = (0..2)
//!     .map(|t| {
//!         let table = Arc::clone(&table);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 let mut guard = table.lock().unwrap();
//!                 guard.insert(format!("key-{t}-{i}"), i.to_string()).unwrap();
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(table.lock().unwrap().len(), 200);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Module implementing the separate-chaining table
mod chained_table;
/// The djb2 hash primitive
pub mod djb2;
/// Error types
mod error;
/// Logger initialisation
pub mod logging;
/// Utility functions and traits for the table
mod utils;

pub use chained_table::{ChainedHashTable, Insertion, Iter};
pub use error::{ResizeError, TableError};
pub use utils::{ChainStats, TableExtensions, from_pairs};
