use super::traits::impl_traversal;
use crate::{Collection, SequenceId};

/// Yields the elements exactly in the order they were added.
///
/// Like every other strategy this takes a snapshot when it is built, so adding to or removing from
/// the collection afterwards has no effect on it. Use [`Collection::iter`] to walk the live data.
///
/// ```rust
/// use orderly_core::{Collection, Order, Traversal};
///
/// let mut collection: Collection<i32> = [7, 15, 6].into_iter().collect();
/// let order = Order::new(&collection);
/// collection.add(1);
/// assert_eq!(order.iter().copied().collect::<Vec<_>>(), vec![7, 15, 6]);
/// ```
pub struct Order<T> {
	data: Vec<T>,
	id: SequenceId,
}

impl<T: Clone> Order<T> {
	pub fn new(collection: &Collection<T>) -> Self {
		let data = collection.as_slice().to_vec();
		log::debug!("arranged {} element(s) in insertion order", data.len());
		Order {
			data,
			id: SequenceId::fresh(),
		}
	}
}

impl_traversal!(Order);
