use std::borrow::Borrow;
use std::hash::Hash;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::bag_error::{fail_fast, BagError, BagResult};

/// A counting container: each distinct element is stored once together with
/// the number of times it occurs.
///
/// Every stored count is at least one. An element whose count drops to zero
/// is removed from storage, so `unique_count` is always the number of
/// elements with a positive count.
///
/// `Multiset` is a plain value. Cloning it produces an independent bag.
#[derive(Clone, Debug)]
pub struct Multiset<T> {
    contents: IndexMap<T, usize>,
}

impl<T> Multiset<T> {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self {
            contents: IndexMap::new(),
        }
    }

    /// Creates an empty bag with room for `capacity` distinct elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contents: IndexMap::with_capacity(capacity),
        }
    }

    /// Number of distinct elements.
    pub fn unique_count(&self) -> usize {
        self.contents.len()
    }

    /// Sum of all occurrence counts.
    pub fn total_count(&self) -> usize {
        self.contents.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn clear(&mut self) {
        trace!("clearing bag with {} unique elements", self.contents.len());
        self.contents.clear();
    }

    pub(crate) fn contents(&self) -> &IndexMap<T, usize> {
        &self.contents
    }

    pub(crate) fn into_contents(self) -> IndexMap<T, usize> {
        self.contents
    }
}

impl<T: Eq + Hash> Multiset<T> {
    /// Builds a bag holding one occurrence per item of `elements`.
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I) -> Self {
        elements.into_iter().collect()
    }

    /// Builds a bag from explicit `(element, count)` pairs. Repeated elements
    /// are merged.
    ///
    /// # Panics
    ///
    /// Panics if any count is zero. See [`Multiset::try_from_pairs`].
    #[track_caller]
    pub fn from_pairs<I: IntoIterator<Item = (T, usize)>>(pairs: I) -> Self {
        fail_fast(Self::try_from_pairs(pairs))
    }

    /// Checked form of [`Multiset::from_pairs`].
    pub fn try_from_pairs<I: IntoIterator<Item = (T, usize)>>(pairs: I) -> BagResult<Self> {
        let mut bag = Self::new();
        for (member, occurrences) in pairs {
            bag.try_add(member, occurrences)?;
        }
        Ok(bag)
    }

    /// Adds `occurrences` copies of `member`.
    ///
    /// # Panics
    ///
    /// Panics if `occurrences` is zero.
    #[track_caller]
    pub fn add(&mut self, member: T, occurrences: usize) {
        fail_fast(self.try_add(member, occurrences))
    }

    /// Checked form of [`Multiset::add`]. The bag is unchanged on error.
    pub fn try_add(&mut self, member: T, occurrences: usize) -> BagResult<()> {
        if occurrences == 0 {
            return Err(rejected(BagError::InvalidQuantity));
        }
        *self.contents.entry(member).or_insert(0) += occurrences;
        trace!(
            "added {} occurrences, bag now holds {} unique elements",
            occurrences,
            self.contents.len()
        );
        Ok(())
    }

    /// Adds a single occurrence of `member`.
    pub fn insert(&mut self, member: T) {
        self.add(member, 1)
    }

    /// Removes `occurrences` copies of `member`. The element leaves the bag
    /// when its count reaches zero.
    ///
    /// # Panics
    ///
    /// Panics if `occurrences` is zero, if `member` is absent, or if fewer
    /// than `occurrences` copies are stored.
    #[track_caller]
    pub fn remove<Q>(&mut self, member: &Q, occurrences: usize)
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        fail_fast(self.try_remove(member, occurrences))
    }

    /// Checked form of [`Multiset::remove`]. The bag is unchanged on error.
    pub fn try_remove<Q>(&mut self, member: &Q, occurrences: usize) -> BagResult<()>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if occurrences == 0 {
            return Err(rejected(BagError::InvalidQuantity));
        }
        let available = self.count(member);
        if available == 0 {
            return Err(rejected(BagError::ElementAbsent));
        }
        if available < occurrences {
            return Err(rejected(BagError::InsufficientCount {
                requested: occurrences,
                available,
            }));
        }

        let remaining = available - occurrences;
        if remaining == 0 {
            self.contents.swap_remove(member);
        } else if let Some(count) = self.contents.get_mut(member) {
            *count = remaining;
        }
        trace!(
            "removed {} occurrences, {} left for this element",
            occurrences,
            remaining
        );
        Ok(())
    }

    /// Removes a single occurrence of `member`.
    ///
    /// # Panics
    ///
    /// Panics if `member` is absent.
    #[track_caller]
    pub fn remove_one<Q>(&mut self, member: &Q)
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove(member, 1)
    }

    /// Drops every occurrence of `member` and returns how many there were.
    pub fn remove_all<Q>(&mut self, member: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.contents.swap_remove(member).unwrap_or(0)
    }

    /// Occurrences of `member`, zero if absent.
    pub fn count<Q>(&self, member: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.contents.get(member).copied().unwrap_or(0)
    }

    pub fn contains<Q>(&self, member: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.contents.contains_key(member)
    }

    /// Adds every occurrence held by `other`.
    pub fn merge(&mut self, other: &Self)
    where
        T: Clone,
    {
        for (member, &count) in &other.contents {
            *self.contents.entry(member.clone()).or_insert(0) += count;
        }
        trace!(
            "merged {} unique elements, bag now holds {}",
            other.contents.len(),
            self.contents.len()
        );
    }
}

fn rejected(err: BagError) -> BagError {
    debug!("rejected bag operation: {err}");
    err
}

impl<T> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for Multiset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.contents == other.contents
    }
}

impl<T: Eq + Hash> Eq for Multiset<T> {}

impl<T: Eq + Hash> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<T: Eq + Hash> Extend<T> for Multiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for member in iter {
            self.insert(member);
        }
    }
}

impl<'a, T: Eq + Hash + Clone + 'a> Extend<&'a T> for Multiset<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Multiset<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}
