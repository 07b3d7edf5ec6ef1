use crate::errors::KeyError;
use std::collections::HashSet;
use std::hash::Hash;

/// [`filter_distinct_by_key`] for key functions that can fail.
///
/// Fail-fast: the first failed key derivation aborts the pass and is returned
/// wrapped with the offending element's input index. Elements admitted before
/// the failure are discarded, never handed back as a partial result.
///
/// # Errors
/// Returns [`KeyError`] when `key_of` fails for some element.
///
/// [`filter_distinct_by_key`]: crate::distinct::filter::filter_distinct_by_key
pub fn try_filter_distinct_by_key<I, K, E, F>(
    items: I,
    mut key_of: F,
) -> Result<Vec<I::Item>, KeyError<E>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> Result<K, E>,
{
    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        let key = key_of(&item).map_err(|source| KeyError { index, source })?;
        if seen.insert(key) {
            kept.push(item);
        }
    }

    Ok(kept)
}
