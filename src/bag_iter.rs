//! Traversal of a [`Multiset`]: unordered iteration over `(element, count)`
//! pairs, and positional access through [`BagIndex`].
//!
//! Both walk the same storage order, so `iter()` and a walk from
//! `start_index()` to `end_index()` visit the pairs in the same sequence.

use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

use indexmap::IndexMap;
use log::debug;

use crate::bag_error::{fail_fast, BagError, BagResult};
use crate::bag_index::BagIndex;
use crate::bag_storage::Multiset;

impl<T> Multiset<T> {
    /// Iterates over `(element, count)` pairs in storage order.
    ///
    /// Each call starts a fresh pass over the current contents.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.contents().iter(),
        }
    }

    /// Position of the first pair. Equal to [`Multiset::end_index`] when the
    /// bag is empty.
    pub fn start_index(&self) -> BagIndex {
        BagIndex::new(0)
    }

    /// Position one past the last pair.
    pub fn end_index(&self) -> BagIndex {
        BagIndex::new(self.unique_count())
    }

    /// The position following `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Multiset::end_index`].
    #[track_caller]
    pub fn index_after(&self, index: BagIndex) -> BagIndex {
        fail_fast(self.try_index_after(index))
    }

    /// Checked form of [`Multiset::index_after`].
    pub fn try_index_after(&self, index: BagIndex) -> BagResult<BagIndex> {
        self.check_readable(index)?;
        Ok(index.successor())
    }

    /// The pair stored at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` lies outside `[start_index, end_index)`.
    #[track_caller]
    pub fn at(&self, index: BagIndex) -> (&T, usize) {
        fail_fast(self.get_at(index))
    }

    /// Checked form of [`Multiset::at`].
    pub fn get_at(&self, index: BagIndex) -> BagResult<(&T, usize)> {
        self.check_readable(index)?;
        self.contents()
            .get_index(index.slot())
            .map(|(member, &count)| (member, count))
            .ok_or_else(|| self.out_of_range(index.slot()))
    }

    /// Every valid index, from `start_index` up to but excluding `end_index`.
    pub fn indices(&self) -> Indices {
        Indices {
            front: 0,
            back: self.unique_count(),
        }
    }

    /// Pairs whose positions fall in `bounds`.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` reach outside `[start_index, end_index]` or start
    /// after they end.
    #[track_caller]
    pub fn range<R: RangeBounds<BagIndex>>(&self, bounds: R) -> Range<'_, T> {
        fail_fast(self.try_range(bounds))
    }

    /// Checked form of [`Multiset::range`].
    pub fn try_range<R: RangeBounds<BagIndex>>(&self, bounds: R) -> BagResult<Range<'_, T>> {
        let len = self.unique_count();
        let front = match bounds.start_bound() {
            Bound::Included(index) => index.slot(),
            Bound::Excluded(index) => index.slot().saturating_add(1),
            Bound::Unbounded => 0,
        };
        let back = match bounds.end_bound() {
            Bound::Included(index) => index.slot().saturating_add(1),
            Bound::Excluded(index) => index.slot(),
            Bound::Unbounded => len,
        };
        if back > len {
            return Err(self.out_of_range(back));
        }
        if front > back {
            return Err(self.out_of_range(front));
        }
        Ok(Range {
            contents: self.contents(),
            front,
            back,
        })
    }

    fn check_readable(&self, index: BagIndex) -> BagResult<()> {
        if self.start_index() <= index && index < self.end_index() {
            Ok(())
        } else {
            Err(self.out_of_range(index.slot()))
        }
    }

    fn out_of_range(&self, position: usize) -> BagError {
        let err = BagError::IndexOutOfRange {
            position,
            len: self.unique_count(),
        };
        debug!("rejected bag access: {err}");
        err
    }
}

/// Borrowing iterator over `(element, count)` pairs.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: indexmap::map::Iter<'a, T, usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(member, &count)| (member, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over `(element, count)` pairs.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: indexmap::map::IntoIter<T, usize>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = (T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a Multiset<T> {
    type Item = (&'a T, usize);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Multiset<T> {
    type Item = (T, usize);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_contents().into_iter(),
        }
    }
}

/// Iterator over the valid indices of a bag.
#[derive(Clone, Debug)]
pub struct Indices {
    front: usize,
    back: usize,
}

impl Iterator for Indices {
    type Item = BagIndex;

    fn next(&mut self) -> Option<BagIndex> {
        if self.front < self.back {
            let index = BagIndex::new(self.front);
            self.front += 1;
            Some(index)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Indices {
    fn next_back(&mut self) -> Option<BagIndex> {
        if self.front < self.back {
            self.back -= 1;
            Some(BagIndex::new(self.back))
        } else {
            None
        }
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}

/// Pairs between two positions, produced by [`Multiset::range`].
#[derive(Debug)]
pub struct Range<'a, T> {
    contents: &'a IndexMap<T, usize>,
    front: usize,
    back: usize,
}

impl<T> Clone for Range<'_, T> {
    fn clone(&self) -> Self {
        Self {
            contents: self.contents,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let (member, &count) = self.contents.get_index(self.front)?;
        self.front += 1;
        Some((member, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Range<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let (member, &count) = self.contents.get_index(self.back - 1)?;
        self.back -= 1;
        Some((member, count))
    }
}

impl<T> ExactSizeIterator for Range<'_, T> {}

impl<T> FusedIterator for Range<'_, T> {}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;
    use test_log::test;

    fn sample() -> Multiset<char> {
        Multiset::from_elements("abracadabra".chars())
    }

    #[test]
    fn iter_sums_to_total() {
        let bag = Multiset::from_elements(["a", "b", "a"]);
        let pairs: Vec<(&&str, usize)> = bag.iter().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.iter().map(|(_, count)| count).sum::<usize>(), 3);
        assert!(pairs.contains(&(&"a", 2)));
        assert!(pairs.contains(&(&"b", 1)));
    }

    #[test]
    fn repeated_reads_agree() {
        let bag = sample();
        let first: Vec<_> = bag.iter().collect();
        let second: Vec<_> = (&bag).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(bag.iter().len(), bag.unique_count());
        let total = bag.total_count();
        assert_eq!(bag.total_count(), total);
        assert_eq!(bag.iter().map(|(_, count)| count).sum::<usize>(), total);
    }

    #[test]
    fn empty_bag_has_no_positions() {
        let bag: Multiset<u32> = Multiset::new();
        assert_eq!(bag.iter().count(), 0);
        assert_eq!(bag.start_index(), bag.end_index());
        assert_eq!(bag.indices().count(), 0);
        assert_eq!(bag.range(..).count(), 0);
    }

    #[test]
    fn index_walk_matches_iteration() {
        let bag = sample();
        let mut walked = Vec::new();
        let mut index = bag.start_index();
        while index != bag.end_index() {
            walked.push(bag.at(index));
            index = bag.index_after(index);
        }
        assert_eq!(walked, bag.iter().collect::<Vec<_>>());
        assert_eq!(
            bag.indices().map(|index| bag.at(index)).collect::<Vec<_>>(),
            walked
        );
    }

    #[test]
    fn reading_at_end_is_out_of_range() {
        let bag = sample();
        assert!(bag.get_at(bag.start_index()).is_ok());
        assert_eq!(
            bag.get_at(bag.end_index()),
            Err(BagError::IndexOutOfRange {
                position: 5,
                len: 5
            })
        );
        assert!(bag.get_at(bag.index_after(bag.index_after(bag.start_index()))).is_ok());
        assert!(bag.try_index_after(bag.end_index()).is_err());
    }

    #[test]
    fn only_half_open_positions_are_readable() {
        let bag = Multiset::from_elements(['x', 'y']);
        let readable: Vec<BagIndex> = bag.indices().collect();
        assert_eq!(readable.first(), Some(&bag.start_index()));
        for index in readable {
            assert!(bag.start_index() <= index && index < bag.end_index());
            assert!(bag.get_at(index).is_ok());
        }
        assert!(bag.get_at(bag.end_index()).is_err());
        assert!(bag.get_at(bag.end_index().successor()).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn at_end_panics() {
        let bag = sample();
        bag.at(bag.end_index());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn advancing_past_end_panics() {
        let bag = Multiset::from_elements([1]);
        let last = bag.index_after(bag.start_index());
        bag.index_after(last);
    }

    #[test]
    fn ranges_are_half_open() {
        let bag = sample();
        let second = bag.index_after(bag.start_index());
        let fourth = bag.index_after(bag.index_after(second));

        let middle: Vec<_> = bag.range(second..fourth).collect();
        assert_eq!(middle, vec![bag.at(second), bag.at(bag.index_after(second))]);
        assert_eq!(bag.range(second..=second).count(), 1);
        assert_eq!(bag.range(..).count(), bag.unique_count());
        assert_eq!(bag.range(fourth..).len(), bag.unique_count() - 3);

        let reversed: Vec<_> = bag.range(..).rev().collect();
        let mut forward: Vec<_> = bag.iter().collect();
        forward.reverse();
        assert_eq!(reversed, forward);
    }

    #[test]
    fn ranges_outside_the_bag_are_rejected() {
        let bag = sample();
        let end = bag.end_index();
        assert!(bag.try_range(..=end).is_err());
        assert!(bag.try_range(end..).is_ok());
        let second = bag.index_after(bag.start_index());
        assert!(bag.try_range(second..bag.start_index()).is_err());
    }

    #[test]
    fn owned_iteration_yields_everything() {
        let bag = sample();
        let mut pairs: Vec<(char, usize)> = bag.into_iter().collect();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![('a', 5), ('b', 2), ('c', 1), ('d', 1), ('r', 2)]
        );
    }

    #[quickcheck]
    fn pairs_reconstruct_the_bag(elements: Vec<u8>) -> bool {
        let bag = Multiset::from_elements(elements.iter().copied());
        let rebuilt = Multiset::from_pairs(bag.iter().map(|(member, count)| (*member, count)));
        rebuilt == bag
            && bag.iter().map(|(_, count)| count).sum::<usize>() == elements.len()
            && bag.indices().len() == bag.unique_count()
    }
}
