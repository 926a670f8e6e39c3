use super::traits::impl_traversal;
use crate::{Collection, SequenceId};

/// Yields the elements in the exact reverse of insertion order. Nothing is sorted.
pub struct ReverseOrder<T> {
	data: Vec<T>,
	id: SequenceId,
}

impl<T: Clone> ReverseOrder<T> {
	pub fn new(collection: &Collection<T>) -> Self {
		let mut data = collection.as_slice().to_vec();
		data.reverse();
		log::debug!("arranged {} element(s) in reverse order", data.len());
		ReverseOrder {
			data,
			id: SequenceId::fresh(),
		}
	}
}

impl_traversal!(ReverseOrder);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Error, Order, Traversal};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case(&[7, 15, 6, 1, 2], &[2, 1, 6, 15, 7])]
	#[case(&[1, 1, 2], &[2, 1, 1])]
	#[case(&[5], &[5])]
	#[case(&[], &[])]
	fn reverses_insertion_order(#[case] input: &[i32], #[case] expected: &[i32]) {
		let c: Collection<i32> = input.iter().copied().collect();
		let rev = ReverseOrder::new(&c);
		assert_eq!(rev.iter().copied().collect::<Vec<_>>(), expected);
	}

	#[test]
	fn mirrors_order() {
		let c: Collection<i32> = [4, 9, 4, 0, 13].into_iter().collect();
		let mut forward: Vec<i32> = Order::new(&c).iter().copied().collect();
		forward.reverse();
		let reversed: Vec<i32> = ReverseOrder::new(&c).iter().copied().collect();
		assert_eq!(forward, reversed);
	}

	#[test]
	fn works_without_ordering() {
		#[derive(Clone, Debug, PartialEq)]
		struct Point(f64, f64);

		let c: Collection<Point> = [Point(0.5, 1.0), Point(2.0, -1.0)].into_iter().collect();
		let rev = ReverseOrder::new(&c);
		assert_eq!(rev.begin().map_ref(|p| p.0), Ok(2.0));
		assert_eq!(rev.end().map_ref(|p| p.1), Err(Error::OutOfRange));
	}

	#[test]
	fn strings() {
		let c: Collection<&str> = ["one", "two", "three"].into_iter().collect();
		let rev = ReverseOrder::new(&c);
		assert_eq!(rev.iter().copied().collect::<Vec<_>>(), vec!["three", "two", "one"]);
	}
}
