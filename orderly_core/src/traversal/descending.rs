use super::traits::impl_traversal;
use crate::{Collection, SequenceId};

/// Yields the elements from largest to smallest.
pub struct DescendingOrder<T> {
	data: Vec<T>,
	id: SequenceId,
}

impl<T: Ord + Clone> DescendingOrder<T> {
	pub fn new(collection: &Collection<T>) -> Self {
		let mut data = collection.as_slice().to_vec();
		data.sort_by(|a, b| b.cmp(a));
		log::debug!("arranged {} element(s) in descending order", data.len());
		DescendingOrder {
			data,
			id: SequenceId::fresh(),
		}
	}
}

impl_traversal!(DescendingOrder);
