//! This module provides `Collection`, the owning, insertion-ordered store every traversal reads
//! from.
//!
//! A collection keeps its elements in the order they were added, permits duplicates and renders
//! itself as `[e1, e2, …]`. Strategies take a snapshot of [`Collection::as_slice`] when they are
//! built; [`Collection::begin`] and [`Collection::iter`] walk the live data instead.
//!
//! # Examples
//!
//! ```rust
//! use orderly_core::{Collection, Error};
//!
//! let mut collection = Collection::new();
//! collection.add(5);
//! collection.add(10);
//! collection.add(5);
//! assert_eq!(collection.remove(&5), Ok(2));
//! assert_eq!(collection.remove(&5), Err(Error::NotFound));
//! assert_eq!(collection.to_string(), "[10]");
//! ```

use crate::{Cursor, Error, Iter, Result, SequenceId};
use itertools::Itertools;
use std::fmt::{Debug, Display, Formatter};

/// A growable sequence of elements in insertion order.
pub struct Collection<T> {
	data: Vec<T>,
	id: SequenceId,
}

impl<T> Collection<T> {
	/// Creates an empty collection.
	pub fn new() -> Self {
		Collection::from(Vec::new())
	}

	/// Appends `value` at the end.
	pub fn add(&mut self, value: T) {
		self.data.push(value);
		log::trace!("added element, collection now holds {}", self.data.len());
	}

	/// Returns the number of elements.
	pub fn size(&self) -> usize {
		self.data.len()
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Read-only view of the elements in insertion order.
	pub fn as_slice(&self) -> &[T] {
		&self.data
	}

	/// Tag carried by the cursors of this collection.
	pub fn id(&self) -> SequenceId {
		self.id
	}

	/// Cursor at the first element of the live data.
	pub fn begin(&self) -> Cursor<'_, T> {
		Cursor::begin(&self.data, self.id)
	}

	/// Cursor one past the last element of the live data.
	pub fn end(&self) -> Cursor<'_, T> {
		Cursor::end(&self.data, self.id)
	}

	pub fn iter(&self) -> Iter<'_, T> {
		Iter::new(self.begin(), self.end())
	}
}

impl<T: PartialEq> Collection<T> {
	/// Removes every element equal to `value` and returns how many were removed.
	///
	/// # Errors
	/// Returns [`Error::NotFound`] if no element equals `value`. The collection is left untouched
	/// in that case.
	pub fn remove(&mut self, value: &T) -> Result<usize> {
		let before = self.data.len();
		self.data.retain(|item| item != value);
		let removed = before - self.data.len();
		if removed == 0 {
			return Err(Error::NotFound);
		}
		log::trace!("removed {removed} element(s), collection now holds {}", self.data.len());
		Ok(removed)
	}

	pub fn contains(&self, value: &T) -> bool {
		self.data.contains(value)
	}
}

impl<T> Default for Collection<T> {
	fn default() -> Self {
		Collection::new()
	}
}

/// A clone is a deep copy with its own [`SequenceId`].
impl<T: Clone> Clone for Collection<T> {
	fn clone(&self) -> Self {
		Collection::from(self.data.clone())
	}
}

impl<T> From<Vec<T>> for Collection<T> {
	fn from(data: Vec<T>) -> Self {
		Collection {
			data,
			id: SequenceId::fresh(),
		}
	}
}

impl<T> FromIterator<T> for Collection<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Collection::from(iter.into_iter().collect::<Vec<T>>())
	}
}

impl<T> Extend<T> for Collection<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for value in iter {
			self.add(value);
		}
	}
}

impl<'a, T> IntoIterator for &'a Collection<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Iter<'a, T> {
		self.iter()
	}
}

/// Renders the elements as `[e1, e2, …]`, or `[]` when empty.
impl<T: Display> Display for Collection<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}]", self.data.iter().join(", "))
	}
}

impl<T: Debug> Debug for Collection<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.data).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn numbers(values: &[i32]) -> Collection<i32> {
		values.iter().copied().collect()
	}

	#[test]
	fn add_keeps_insertion_order() {
		let mut c = Collection::new();
		c.add(5);
		c.add(10);
		c.add(15);
		assert_eq!(c.size(), 3);
		assert_eq!(c.as_slice(), &[5, 10, 15]);
		assert_eq!(c.to_string(), "[5, 10, 15]");
	}

	#[rstest]
	#[case(&[1, 2, 3], 2, 1, "[1, 3]")]
	#[case(&[2, 1, 2, 3, 2], 2, 3, "[1, 3]")]
	#[case(&[7, 7], 7, 2, "[]")]
	fn remove_drops_every_occurrence(
		#[case] values: &[i32],
		#[case] target: i32,
		#[case] removed: usize,
		#[case] rendered: &str,
	) {
		let mut c = numbers(values);
		assert_eq!(c.remove(&target), Ok(removed));
		assert_eq!(c.size(), values.len() - removed);
		assert_eq!(c.to_string(), rendered);
		assert!(!c.contains(&target));
	}

	#[test]
	fn remove_absent_value_fails_without_change() {
		let mut c = numbers(&[1, 2, 3]);
		assert_eq!(c.remove(&99), Err(Error::NotFound));
		assert_eq!(c.size(), 3);
		assert_eq!(c.to_string(), "[1, 2, 3]");
	}

	#[test]
	fn remove_from_empty_fails() {
		let mut c: Collection<i32> = Collection::new();
		assert_eq!(c.remove(&1), Err(Error::NotFound));
		assert!(c.is_empty());
	}

	#[test]
	fn remove_twice_fails_the_second_time() {
		let mut c = numbers(&[1, 2, 3]);
		assert_eq!(c.remove(&2), Ok(1));
		assert_eq!(c.remove(&2), Err(Error::NotFound));
	}

	#[test]
	fn renders_empty_and_single() {
		assert_eq!(Collection::<i32>::new().to_string(), "[]");
		assert_eq!(numbers(&[42]).to_string(), "[42]");
	}

	#[test]
	fn works_with_strings() {
		let mut c = Collection::new();
		c.add("hello".to_string());
		c.add("world".to_string());
		assert_eq!(c.to_string(), "[hello, world]");
		assert_eq!(c.remove(&"hello".to_string()), Ok(1));
		assert_eq!(c.remove(&"not_there".to_string()), Err(Error::NotFound));
		assert_eq!(c.size(), 1);
	}

	#[test]
	fn clone_is_independent() {
		let mut original = numbers(&[1, 2, 3]);
		let copy = original.clone();
		original.add(4);
		assert_eq!(copy.to_string(), "[1, 2, 3]");
		assert_eq!(original.to_string(), "[1, 2, 3, 4]");
		assert!(copy.id() != original.id());
	}

	#[test]
	fn live_cursors_follow_the_data() {
		let mut c = numbers(&[7, 15]);
		c.add(6);
		let values: Vec<i32> = c.iter().copied().collect();
		assert_eq!(values, vec![7, 15, 6]);

		let mut cursor = c.begin();
		for _ in 0..c.size() {
			cursor.advance();
		}
		assert_eq!(cursor, c.end());
		assert_eq!(cursor.get(), Err(Error::OutOfRange));
	}

	#[test]
	fn empty_begin_equals_end() {
		let c: Collection<i32> = Collection::default();
		assert_eq!(c.begin(), c.end());
		assert_eq!(c.iter().count(), 0);
	}

	#[test]
	fn extend_and_debug() {
		let mut c = numbers(&[1]);
		c.extend([2, 3]);
		assert_eq!(format!("{c:?}"), "[1, 2, 3]");
		assert_eq!((&c).into_iter().sum::<i32>(), 6);
	}
}
