//! `rb_ordered_set` is an ordered set of integer keys based on a red-black tree.
//!
//! It fully implements the insertion and deletion functionality of a red-black tree,
//! ensuring that each modification operation requires at most O(logN) time complexity.
//!
//! To safely and efficiently handle insertion and deletion operations in Rust,
//! `rb_ordered_set` uses an array to simulate pointers for managing the parent-child
//! references in the red-black tree. Slot 0 of the array holds the tree's own
//! sentinel node, so every child and parent slot is always a dereferenceable index
//! and the balancing code never branches on a missing reference. This approach
//! also ensures that the set has the `Send` and `Unpin` traits, allowing it to
//! be safely transferred between threads and to maintain a fixed memory location
//! during asynchronous operations.
//!
//! # Example
//!
//! ```rust
//! use rb_ordered_set::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//! set.insert(42);
//! assert!(set.contains(42));
//! assert!(!set.contains(7));
//! ```
//!

mod index;
mod iter;
mod node;
mod orderedset;


pub use index::{DefaultIx, IndexType, NodeIndex};
pub use iter::{IntoIter, Iter};
pub use orderedset::OrderedSet;
