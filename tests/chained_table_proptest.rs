#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]
use std::{
    collections::{HashMap, HashSet},
    num::NonZeroUsize,
};

use chaintable::{ChainedHashTable, Insertion, TableError, djb2::bucket_index};
use proptest::prelude::*;

fn pairs() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map("[a-z0-9-]{0,10}", ".{0,8}", 0..64)
}

fn filled(capacity: usize, pairs: &HashMap<String, String>) -> ChainedHashTable {
    let mut table = ChainedHashTable::with_capacity(capacity).unwrap();
    for (k, v) in pairs {
        assert_eq!(table.insert(k.as_str(), v.as_str()).unwrap(), Insertion::Inserted);
    }
    table
}

proptest! {
    #[test]
    fn insert_then_get_round_trips(capacity in 1usize..32, pairs in pairs()) {
        let table = filled(capacity, &pairs);

        prop_assert_eq!(table.len(), pairs.len());
        for (k, v) in &pairs {
            prop_assert_eq!(table.get(k), Some(v.as_str()));
        }
    }

    #[test]
    fn overwrite_keeps_one_entry(
        capacity in 1usize..16,
        key in ".{0,10}",
        first in ".{0,8}",
        second in ".{0,8}"
    ) {
        let mut table = ChainedHashTable::with_capacity(capacity).unwrap();
        table.insert(key.as_str(), first.as_str()).unwrap();
        let outcome = table.insert(key.as_str(), second.as_str()).unwrap();

        prop_assert_eq!(outcome, Insertion::Overwritten { previous: first });
        prop_assert_eq!(table.len(), 1);
        prop_assert_eq!(table.get(&key), Some(second.as_str()));
    }

    #[test]
    fn remove_only_affects_its_key(
        capacity in 1usize..16,
        pairs in pairs(),
        pick in any::<prop::sample::Index>()
    ) {
        prop_assume!(!pairs.is_empty());
        let mut table = filled(capacity, &pairs);
        let keys: Vec<&String> = pairs.keys().collect();
        let victim: &String = *pick.get(keys.as_slice());

        prop_assert_eq!(table.remove(victim), Ok(pairs[victim].clone()));
        prop_assert_eq!(table.get(victim), None);
        prop_assert_eq!(table.len(), pairs.len() - 1);

        let again = table.remove(victim);
        prop_assert_eq!(again, Err(TableError::KeyNotFound { key: victim.clone() }));
        prop_assert_eq!(table.len(), pairs.len() - 1);

        for (k, v) in pairs.iter().filter(|(k, _)| *k != victim) {
            prop_assert_eq!(table.get(k), Some(v.as_str()));
        }
    }

    #[test]
    fn single_bucket_chain_survives_any_removal(
        keys in prop::collection::hash_set("[a-z]{1,6}", 1..24),
        pick in any::<prop::sample::Index>()
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut table = ChainedHashTable::with_capacity(1).unwrap();
        for k in &keys {
            table.insert(k.as_str(), format!("v-{k}")).unwrap();
        }
        prop_assert_eq!(table.chain_len(0), Some(keys.len()));

        let victim: &String = pick.get(&keys);
        table.remove(victim).unwrap();

        prop_assert_eq!(table.chain_len(0), Some(keys.len() - 1));
        let order: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        let survivors: Vec<&str> =
            keys.iter().filter(|k| *k != victim).map(String::as_str).collect();
        prop_assert_eq!(&order, &survivors);
        for k in survivors {
            let expected = format!("v-{k}");
            prop_assert_eq!(table.get(k), Some(expected.as_str()));
        }
    }

    #[test]
    fn resize_preserves_contents(capacity in 1usize..32, pairs in pairs()) {
        let table = filled(capacity, &pairs);

        let table = table.resize().unwrap();

        prop_assert_eq!(table.capacity(), capacity * 2);
        prop_assert_eq!(table.len(), pairs.len());
        for (k, v) in &pairs {
            prop_assert_eq!(table.get(k), Some(v.as_str()));
        }
    }

    #[test]
    fn chains_match_djb2_placement(capacity in 1usize..32, pairs in pairs()) {
        let table = filled(capacity, &pairs).resize().unwrap();
        let buckets = NonZeroUsize::new(table.capacity()).unwrap();

        let mut expected = vec![0usize; table.capacity()];
        for k in pairs.keys() {
            expected[bucket_index(k, buckets)] += 1;
        }

        prop_assert_eq!(table.chain_lengths().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn distinct_keys_seen_once_by_iter() {
    let mut table = ChainedHashTable::with_capacity(5).unwrap();
    for i in 0..50 {
        table.insert(format!("k{}", i % 20), i.to_string()).unwrap();
    }

    let seen: HashSet<&str> = table.iter().map(|(k, _)| k).collect();
    assert_eq!(seen.len(), 20);
    assert_eq!(table.len(), 20);
}
