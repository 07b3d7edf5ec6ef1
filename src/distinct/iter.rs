use crate::distinct::filter::DistinctByKey;
use std::hash::Hash;
use std::iter::FusedIterator;

/// Lazy counterpart of [`filter_distinct_by_key`]: pulls from the inner
/// iterator and yields only first occurrences per derived key.
///
/// [`filter_distinct_by_key`]: crate::distinct::filter::filter_distinct_by_key
pub struct DistinctByKeyIter<I, F, K> {
    iter: I,
    admitter: DistinctByKey<F, K>,
}

impl<I, F, K> Iterator for DistinctByKeyIter<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let admitter = &mut self.admitter;
        self.iter.find(|item| admitter.admit(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anything between "all duplicates" and "all distinct".
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

impl<I, F, K> FusedIterator for DistinctByKeyIter<I, F, K>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
}

/// Extension methods for distinct-by-key filtering on any iterator.
pub trait DistinctIteratorExt: Iterator {
    /// Yield only the first element observed for each distinct key, in input
    /// order. The seen-set lives inside the returned adaptor, so every call
    /// starts a fresh pass.
    fn distinct_by_key<F, K>(self, key_of: F) -> DistinctByKeyIter<Self, F, K>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Eq + Hash,
    {
        DistinctByKeyIter {
            iter: self,
            admitter: DistinctByKey::new(key_of),
        }
    }

    /// Distinct over elements compared by value: `distinct_by_key` with the
    /// identity key.
    fn distinct(self) -> DistinctByKeyIter<Self, fn(&Self::Item) -> Self::Item, Self::Item>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        let identity: fn(&Self::Item) -> Self::Item = |item| item.clone();
        self.distinct_by_key(identity)
    }
}

impl<I: Iterator> DistinctIteratorExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptor_keeps_first_occurrence_per_key() {
        let names = ["Kuba", "Emilka", "Jagoda", "Jaga", "Kuba", "Emilka"];
        let out: Vec<&str> = names.iter().copied().distinct().collect();
        assert_eq!(out, vec!["Kuba", "Emilka", "Jagoda", "Jaga"]);
    }

    #[test]
    fn adaptor_is_lazy() {
        let mut derivations = 0;
        let mut iter = (0..100).distinct_by_key(|x| {
            derivations += 1;
            x % 3
        });

        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(1));
        drop(iter);
        // one derivation per element pulled, none for the tail
        assert_eq!(derivations, 2);
    }

    #[test]
    fn adaptor_skips_duplicates_between_yields() {
        let mut iter = [1, 1, 1, 2, 2, 3].into_iter().distinct();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn size_hint_never_exceeds_inner_upper_bound() {
        let iter = [1, 1, 2].into_iter().distinct();
        assert_eq!(iter.size_hint(), (0, Some(3)));
    }
}
