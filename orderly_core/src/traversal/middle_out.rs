use super::traits::impl_traversal;
use crate::{Collection, SequenceId};
#[cfg(feature = "cli")]
use clap::ValueEnum;
use itertools::interleave;

/// Which neighbour of the middle element is emitted first at each distance.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MiddleOutTieBreak {
	/// `mid - offset` before `mid + offset`.
	#[default]
	LeftFirst,
	/// `mid + offset` before `mid - offset`.
	RightFirst,
}

/// Starts at the middle element and alternates outwards to both sides.
///
/// The middle index is `len / 2`, which is the exact middle for an odd length and rounds up for
/// an even length. The elements keep their insertion order as the basis, nothing is sorted. Once
/// one side runs out the rest of the other side follows in order.
///
/// ```rust
/// use orderly_core::{Collection, MiddleOutOrder, Traversal};
///
/// let collection: Collection<i32> = [7, 15, 6, 1, 2].into_iter().collect();
/// let middle_out = MiddleOutOrder::new(&collection);
/// assert_eq!(middle_out.iter().copied().collect::<Vec<_>>(), vec![6, 15, 1, 7, 2]);
/// ```
pub struct MiddleOutOrder<T> {
	data: Vec<T>,
	id: SequenceId,
}

impl<T: Clone> MiddleOutOrder<T> {
	/// Builds the traversal with [`MiddleOutTieBreak::LeftFirst`].
	pub fn new(collection: &Collection<T>) -> Self {
		MiddleOutOrder::with_tie_break(collection, MiddleOutTieBreak::default())
	}

	pub fn with_tie_break(collection: &Collection<T>, tie_break: MiddleOutTieBreak) -> Self {
		let data = middle_out(collection.as_slice().to_vec(), tie_break);
		log::debug!(
			"arranged {} element(s) in middle-out order ({tie_break:?})",
			data.len()
		);
		MiddleOutOrder {
			data,
			id: SequenceId::fresh(),
		}
	}
}

impl_traversal!(MiddleOutOrder);

fn middle_out<T>(mut data: Vec<T>, tie_break: MiddleOutTieBreak) -> Vec<T> {
	let len = data.len();
	let mut right = data.split_off(len / 2).into_iter();
	let Some(middle) = right.next() else {
		return Vec::new();
	};
	let left = data.into_iter().rev();

	let mut result = Vec::with_capacity(len);
	result.push(middle);
	match tie_break {
		MiddleOutTieBreak::LeftFirst => result.extend(interleave(left, right)),
		MiddleOutTieBreak::RightFirst => result.extend(interleave(right, left)),
	}
	result
}
