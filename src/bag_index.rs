use std::fmt;

/// A position inside a [`Multiset`](crate::Multiset).
///
/// Indices only come from the bag itself: [`start_index`], [`end_index`]
/// and [`index_after`]. They compare exactly as the underlying storage
/// positions do, which is the bag's traversal order.
///
/// An index is tied to the state of the bag that produced it. After any
/// mutation it may point at a different pair or past the end; reading it
/// then yields some current pair or an out-of-range error, and which of the
/// two is unspecified.
///
/// [`start_index`]: crate::Multiset::start_index
/// [`end_index`]: crate::Multiset::end_index
/// [`index_after`]: crate::Multiset::index_after
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BagIndex {
    slot: usize,
}

impl BagIndex {
    pub(crate) fn new(slot: usize) -> Self {
        Self { slot }
    }

    pub(crate) fn slot(self) -> usize {
        self.slot
    }

    pub(crate) fn successor(self) -> Self {
        Self::new(self.slot + 1)
    }
}

impl fmt::Debug for BagIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BagIndex({})", self.slot)
    }
}
