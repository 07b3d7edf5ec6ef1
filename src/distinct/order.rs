use crate::distinct::filter::filter_distinct_by_key;
use std::hash::Hash;

/// Distinct-by-key over a batch whose elements arrived out of order, tagged
/// with their original positions.
///
/// "First occurrence wins" is only well-defined under a fixed traversal
/// order, so a concurrently produced batch must be re-sequenced before the
/// pass. This sorts by the original index, then runs the ordinary sequential
/// filter, making the result identical to filtering the in-order input.
pub fn filter_distinct_by_key_indexed<T, K, F>(mut indexed: Vec<(usize, T)>, key_of: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    indexed.sort_by_key(|(index, _)| *index);
    filter_distinct_by_key(indexed.into_iter().map(|(_, item)| item), key_of)
}
