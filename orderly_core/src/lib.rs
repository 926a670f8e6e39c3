//! An insertion-ordered collection and a family of strategies that traverse its elements in
//! different orders without touching the collection itself.
//!
//! ```rust
//! use orderly_core::{AscendingOrder, Collection, SideCrossOrder, Traversal};
//!
//! let mut collection = Collection::new();
//! for value in [7, 15, 6, 1, 2] {
//! 	collection.add(value);
//! }
//! assert_eq!(collection.to_string(), "[7, 15, 6, 1, 2]");
//!
//! let ascending = AscendingOrder::new(&collection);
//! assert_eq!(ascending.iter().copied().collect::<Vec<_>>(), vec![1, 2, 6, 7, 15]);
//!
//! for value in &SideCrossOrder::new(&collection) {
//! 	print!("{value} ");
//! }
//! ```

mod collection;
mod cursor;
mod error;
pub mod traversal;

pub use collection::*;
pub use cursor::*;
pub use error::*;
pub use traversal::*;
