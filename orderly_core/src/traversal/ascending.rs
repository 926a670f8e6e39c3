use super::traits::impl_traversal;
use crate::{Collection, SequenceId};

/// Yields the elements from smallest to largest.
///
/// Equal elements keep their insertion order, the sort is stable.
pub struct AscendingOrder<T> {
	data: Vec<T>,
	id: SequenceId,
}

impl<T: Ord + Clone> AscendingOrder<T> {
	pub fn new(collection: &Collection<T>) -> Self {
		let mut data = collection.as_slice().to_vec();
		data.sort();
		log::debug!("arranged {} element(s) in ascending order", data.len());
		AscendingOrder {
			data,
			id: SequenceId::fresh(),
		}
	}
}

impl_traversal!(AscendingOrder);
