//! Contract violations reported by [`Multiset`](crate::Multiset).

use thiserror::Error;

/// Every way a caller can break the [`Multiset`](crate::Multiset) contract.
///
/// The checked operations (`try_add`, `try_remove`, `get_at`, ...) return
/// these values. Their unchecked counterparts panic with the same message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BagError {
    /// A quantity of zero was passed to an add or remove, or found in a seed pair.
    #[error("occurrences must be greater than zero")]
    InvalidQuantity,
    /// Removal of an element the bag does not hold.
    #[error("element is not present in the bag")]
    ElementAbsent,
    /// Removal of more occurrences than are stored.
    #[error("cannot remove {requested} occurrences, only {available} stored")]
    InsufficientCount {
        /// Occurrences the caller asked to remove.
        requested: usize,
        /// Occurrences currently stored for the element.
        available: usize,
    },
    /// Positional access outside `[start_index, end_index)`.
    #[error("index {position} is out of range for a bag with {len} unique elements")]
    IndexOutOfRange {
        /// Raw position of the rejected index.
        position: usize,
        /// Unique element count at the time of access.
        len: usize,
    },
}

pub(crate) type BagResult<T> = Result<T, BagError>;

/// Unwraps a checked result, turning a contract violation into a panic.
#[track_caller]
pub(crate) fn fail_fast<T>(result: BagResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
