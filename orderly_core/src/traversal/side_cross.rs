use super::traits::impl_traversal;
use crate::{Collection, SequenceId};
use itertools::interleave;

/// Alternates between the smallest and the largest remaining element: smallest, largest, second
/// smallest, second largest, and so on. For an odd number of elements the median comes last.
///
/// ```rust
/// use orderly_core::{Collection, SideCrossOrder, Traversal};
///
/// let collection: Collection<i32> = [7, 15, 6, 1, 2].into_iter().collect();
/// let side_cross = SideCrossOrder::new(&collection);
/// assert_eq!(side_cross.iter().copied().collect::<Vec<_>>(), vec![1, 15, 2, 7, 6]);
/// ```
pub struct SideCrossOrder<T> {
	data: Vec<T>,
	id: SequenceId,
}

impl<T: Ord + Clone> SideCrossOrder<T> {
	pub fn new(collection: &Collection<T>) -> Self {
		let mut sorted = collection.as_slice().to_vec();
		sorted.sort();
		let data = side_cross(sorted);
		log::debug!("arranged {} element(s) in side-cross order", data.len());
		SideCrossOrder {
			data,
			id: SequenceId::fresh(),
		}
	}
}

impl_traversal!(SideCrossOrder);

/// Interleaves the lower half of `sorted` with the upper half walked backwards.
/// The lower half takes the extra element when the length is odd.
fn side_cross<T>(mut sorted: Vec<T>) -> Vec<T> {
	let upper = sorted.split_off(sorted.len().div_ceil(2));
	interleave(sorted, upper.into_iter().rev()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Error, Traversal};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case(&[7, 15, 6, 1, 2], &[1, 15, 2, 7, 6])]
	#[case(&[1, 3, 8, 10], &[1, 10, 3, 8])]
	#[case(&[10, 3, 8, 1], &[1, 10, 3, 8])]
	#[case(&[5, 1], &[1, 5])]
	#[case(&[42], &[42])]
	#[case(&[], &[])]
	#[case(&[2, 2, 1, 1], &[1, 2, 1, 2])]
	fn interleaves_both_ends(#[case] input: &[i32], #[case] expected: &[i32]) {
		let c: Collection<i32> = input.iter().copied().collect();
		let sco = SideCrossOrder::new(&c);
		assert_eq!(sco.iter().copied().collect::<Vec<_>>(), expected);
		assert_eq!(sco.len(), input.len());
	}

	#[test]
	fn characters() {
		let c: Collection<char> = "daebc".chars().collect();
		let sco = SideCrossOrder::new(&c);
		assert_eq!(sco.iter().collect::<String>(), "aebdc");
	}

	#[test]
	fn strings() {
		let c: Collection<String> = ["zebra", "apple", "monkey", "banana", "cat"]
			.into_iter()
			.map(String::from)
			.collect();
		let sco = SideCrossOrder::new(&c);
		assert_eq!(
			sco.iter().map(String::as_str).collect::<Vec<_>>(),
			vec!["apple", "zebra", "banana", "monkey", "cat"]
		);
	}

	#[test]
	fn empty_and_end() {
		let c: Collection<i32> = Collection::new();
		let sco = SideCrossOrder::new(&c);
		assert_eq!(sco.begin(), sco.end());
		assert_eq!(sco.end().get(), Err(Error::OutOfRange));
	}
}
