//! Walks a small table through insert, remove and resize.

use chaintable::{ChainedHashTable, TableExtensions, logging::init_logger};
use log::info;

/// Buckets in the starting table
const INITIAL_CAPACITY: usize = 8;
/// Pairs inserted before resizing; more than `INITIAL_CAPACITY` so some buckets collide
const PAIRS: usize = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let mut table = ChainedHashTable::with_capacity(INITIAL_CAPACITY)?;

    for i in 0..PAIRS {
        table.insert(format!("key-{i}"), format!("val-{i}"))?;
    }
    info!("inserted {} pairs, longest chain {}", table.len(), table.longest_chain());

    let removed = table.remove(&format!("key-{}", PAIRS.saturating_sub(1)))?;
    info!("removed value {removed}");

    let old_capacity = table.capacity();
    let table = table.resize()?;
    let new_capacity = table.capacity();

    println!("\nResizing hash table from {old_capacity} to {new_capacity}.");

    for i in 0..PAIRS {
        let key = format!("key-{i}");
        match table.get(&key) {
            Some(value) => println!("{key} => {value}"),
            None => println!("{key} not found"),
        }
    }

    Ok(())
}
