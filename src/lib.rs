//! A generic multiset ("bag"): each distinct element is stored once with the
//! number of times it occurs.
//!
//! ```
//! use bag::Multiset;
//!
//! let mut fruit = Multiset::from_pairs([("Banana", 2), ("Orange", 1)]);
//! assert_eq!(fruit.unique_count(), 2);
//! assert_eq!(fruit.total_count(), 3);
//!
//! fruit.remove(&"Banana", 2);
//! assert!(!fruit.contains(&"Banana"));
//! assert_eq!(fruit.description(), r#"["Orange": 1]"#);
//! ```
//!
//! Positional traversal goes through the opaque [`BagIndex`]:
//!
//! ```
//! use bag::Multiset;
//!
//! let letters = Multiset::from_elements("hello".chars());
//! let mut index = letters.start_index();
//! let mut total = 0;
//! while index != letters.end_index() {
//!     total += letters.at(index).1;
//!     index = letters.index_after(index);
//! }
//! assert_eq!(total, 5);
//! ```
//!
//! Contract violations (zero quantities, removing what is not there, reading
//! outside `[start_index, end_index)`) panic. Every such operation has a
//! checked sibling returning [`BagError`] instead.

mod bag_error;
mod bag_fmt;
mod bag_index;
mod bag_iter;
mod bag_storage;

pub use bag_error::BagError;
pub use bag_index::BagIndex;
pub use bag_iter::{Indices, IntoIter, Iter, Range};
pub use bag_storage::Multiset;
