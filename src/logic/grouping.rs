//! Partitioning of ordered match lists by a structural key.

use std::collections::HashMap;
use std::hash::Hash;

/// Split `items` into partitions sharing the same key.
///
/// Partitions come out in first-occurrence order of their key and keep the input order of
/// their items. No partition is ever empty; an empty input gives an empty output.
pub fn split_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<Vec<T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut partitions: Vec<Vec<T>> = Vec::new();
    for item in items {
        let idx = *slots.entry(key(&item)).or_insert_with(|| {
            partitions.push(Vec::new());
            partitions.len() - 1
        });
        partitions[idx].push(item);
    }
    partitions
}
