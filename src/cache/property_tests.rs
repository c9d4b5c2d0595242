//! Property-Based Tests for the Local Cache
//!
//! Uses proptest to check the size bound, recency ordering and merge rules
//! of [`LocalStore`] over arbitrary operation sequences.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::cache::{CacheEntry, LocalStore};

// == Strategies ==
/// Paste ids drawn from a small alphabet so sequences revisit ids.
fn paste_id_strategy() -> impl Strategy<Value = String> {
    "[a-f]{1,2}".prop_map(|s| s)
}

/// A write with any subset of rendered/raw supplied.
fn entry_strategy() -> impl Strategy<Value = CacheEntry> {
    (
        prop::option::of("[a-z <>/]{0,16}"),
        prop::option::of(prop::collection::vec(any::<u8>(), 0..16)),
    )
        .prop_map(|(rendered, raw)| CacheEntry {
            meta: None,
            rendered,
            raw,
        })
}

#[derive(Debug, Clone)]
enum CacheOp {
    Push { id: String, entry: CacheEntry },
    Get { id: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (paste_id_strategy(), entry_strategy())
            .prop_map(|(id, entry)| CacheOp::Push { id, entry }),
        paste_id_strategy().prop_map(|id| CacheOp::Get { id }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Size never exceeds capacity, and N > C distinct writes fill it exactly.
    #[test]
    fn prop_bounded_size(
        capacity in 1usize..8,
        ids in prop::collection::hash_set(paste_id_strategy(), 1..30)
    ) {
        let mut store = LocalStore::new(capacity).unwrap();

        for id in &ids {
            store.push(id, CacheEntry::new().with_rendered(id.clone()));
            prop_assert!(store.len() <= capacity);
        }

        prop_assert_eq!(store.len(), ids.len().min(capacity));
    }

    // The store always matches a reference model: an ordered list of ids
    // (most recent first) plus the merged entry of each id.
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut store = LocalStore::new(capacity).unwrap();
        let mut order: Vec<String> = Vec::new();
        let mut model: HashMap<String, CacheEntry> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Push { id, entry } => {
                    let merged = entry.clone().merged_over(model.get(&id));
                    model.insert(id.clone(), merged);
                    order.retain(|k| k != &id);
                    order.insert(0, id.clone());
                    while order.len() > capacity {
                        if let Some(evicted) = order.pop() {
                            model.remove(&evicted);
                        }
                    }
                    store.push(&id, entry);
                }
                CacheOp::Get { id } => {
                    let expected = model.get(&id).cloned();
                    if expected.is_some() {
                        order.retain(|k| k != &id);
                        order.insert(0, id.clone());
                    }
                    prop_assert_eq!(store.get(&id).cloned(), expected);
                }
            }

            prop_assert_eq!(store.recency_order(), order.clone());
        }

        let cached: HashSet<&String> = model.keys().collect();
        prop_assert_eq!(cached.len(), store.len());
    }

    // A partial write never clears a field that was already cached.
    #[test]
    fn prop_partial_write_never_drops_fields(
        first in entry_strategy(),
        second in entry_strategy()
    ) {
        let mut store = LocalStore::new(1).unwrap();

        store.push("p", first.clone());
        store.push("p", second.clone());

        let cached = store.peek("p").unwrap();
        prop_assert_eq!(
            cached.rendered.clone(),
            second.rendered.or(first.rendered)
        );
        prop_assert_eq!(cached.raw.clone(), second.raw.or(first.raw));
    }
}
