use log::debug;
use std::collections::HashSet;
use std::hash::Hash;

/// Stateful admitter behind a distinct-by-key pass.
///
/// Owns the set of keys seen so far. Build a fresh one per pass; the seen-set
/// must never be shared across independent passes, otherwise elements of a
/// later pass get rejected by keys observed in an earlier one.
pub struct DistinctByKey<F, K> {
    key_of: F,
    seen: HashSet<K>,
}

impl<F, K> DistinctByKey<F, K> {
    pub fn new(key_of: F) -> Self {
        Self {
            key_of,
            seen: HashSet::new(),
        }
    }

    /// Derive the item's key and insert it into the seen-set. Returns `true`
    /// exactly when the key was newly inserted, i.e. the item is the first
    /// occurrence and should be kept.
    pub fn admit<T>(&mut self, item: &T) -> bool
    where
        F: FnMut(&T) -> K,
        K: Eq + Hash,
    {
        let key = (self.key_of)(item);
        self.seen.insert(key)
    }

    /// Number of distinct keys observed so far in this pass.
    #[must_use]
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}

/// Keep, for each distinct key, only the first element (in input order) that
/// produced it. Output order is a subsequence of input order.
///
/// `key_of` must be pure: repeated calls on the same element must yield equal
/// keys. O(n) key derivations and set operations for n input elements.
pub fn filter_distinct_by_key<I, K, F>(items: I, key_of: F) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut admitter = DistinctByKey::new(key_of);
    let mut kept = Vec::new();
    let mut total = 0usize;

    for item in items {
        total += 1;
        if admitter.admit(&item) {
            kept.push(item);
        }
    }

    debug!(
        "distinct-by-key pass: kept {} of {} elements",
        kept.len(),
        total
    );
    kept
}
